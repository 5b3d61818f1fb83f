//! Workout summaries and their text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language used for rendered summary lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "ru")]
    Russian,
}

impl Locale {
    /// Parses a short language tag such as `en` or `ru`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "ru" | "russian" => Some(Self::Russian),
            _ => None,
        }
    }
}

/// Computed summary of a single workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub training_type: &'static str,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl Report {
    /// Renders the summary line in the requested language.
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::English => self.to_string(),
            Locale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories spent: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
