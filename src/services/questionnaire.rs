use crate::{
    error::{AppError, AppResult},
    models::{PreferenceProfile, Question, QuestionKind, QuestionOption},
};

fn question(
    id: &str,
    title: &str,
    subtitle: &str,
    kind: QuestionKind,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        kind,
        options,
    }
}

fn label_only(values: &[&str]) -> Vec<QuestionOption> {
    values.iter().map(|v| QuestionOption::label_only(v)).collect()
}

fn value_label(pairs: &[(&str, &str)]) -> Vec<QuestionOption> {
    pairs
        .iter()
        .map(|(value, label)| QuestionOption::value_label(value, label))
        .collect()
}

/// The onboarding questions, in the order they are asked
pub fn questions() -> Vec<Question> {
    vec![
        question(
            "interests",
            "Quels sont vos centres d'intérêt ?",
            "Sélectionnez toutes les catégories qui vous intéressent",
            QuestionKind::Multiple,
            label_only(&[
                "Musique",
                "Sport",
                "Art",
                "Gastronomie",
                "Technologie",
                "Théâtre",
                "Cinéma",
                "Danse",
            ]),
        ),
        question(
            "preferredLocations",
            "Où préférez-vous assister aux événements ?",
            "Choisissez vos villes préférées",
            QuestionKind::Multiple,
            label_only(&[
                "Paris", "Lyon", "Marseille", "Toulouse", "Nice", "Nantes", "Bordeaux", "Lille",
            ]),
        ),
        question(
            "budget",
            "Quel est votre budget habituel ?",
            "Sélectionnez votre gamme de prix préférée",
            QuestionKind::Single,
            value_label(&[
                ("low", "Économique (0-20€)"),
                ("medium", "Moyen (20-50€)"),
                ("high", "Premium (50€+)"),
            ]),
        ),
        question(
            "availability",
            "Quand êtes-vous disponible ?",
            "Sélectionnez vos créneaux préférés",
            QuestionKind::Multiple,
            value_label(&[
                ("weekend", "Week-end"),
                ("weekday", "Semaine"),
                ("evening", "Soirée"),
            ]),
        ),
        question(
            "groupSize",
            "Avec qui assistez-vous aux événements ?",
            "Choisissez votre configuration habituelle",
            QuestionKind::Single,
            value_label(&[
                ("solo", "Seul(e)"),
                ("couple", "En couple"),
                ("small", "Petit groupe (3-5)"),
                ("large", "Grand groupe (6+)"),
            ]),
        ),
    ]
}

/// Checks a submitted questionnaire before it is stored
///
/// Every multiple-choice step needs at least one answer. Budget and group
/// size are enums, so serde already rejected anything outside their options.
pub fn validate_submission(profile: &PreferenceProfile) -> AppResult<()> {
    if profile.interests.iter().all(|i| i.trim().is_empty()) {
        return Err(AppError::InvalidInput(
            "At least one interest is required".to_string(),
        ));
    }

    if profile.preferred_locations.iter().all(|l| l.trim().is_empty()) {
        return Err(AppError::InvalidInput(
            "At least one preferred location is required".to_string(),
        ));
    }

    if profile.availability.is_empty() {
        return Err(AppError::InvalidInput(
            "At least one availability slot is required".to_string(),
        ));
    }

    if !profile.travel_distance.is_finite() || profile.travel_distance < 0.0 {
        return Err(AppError::InvalidInput(
            "Travel distance must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
