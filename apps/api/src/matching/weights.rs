use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::models::job::ExperienceLevel;

/// Points awarded per matching dimension, plus the experience floors used by
/// the experience dimension. Points must add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub job_type: f64,
    pub work_mode: f64,
    pub location: f64,
    pub experience: f64,
    pub intermediate_min_years: u32,
    pub senior_min_years: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            job_type: 20.0,
            work_mode: 15.0,
            location: 10.0,
            experience: 15.0,
            intermediate_min_years: 1,
            senior_min_years: 3,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.job_type + self.work_mode + self.location + self.experience
    }

    /// Minimum years of experience for a level. `Lead` has no floor and never
    /// matches.
    pub fn min_years(&self, level: ExperienceLevel) -> Option<u32> {
        match level {
            ExperienceLevel::Entry => Some(0),
            ExperienceLevel::Intermediate => Some(self.intermediate_min_years),
            ExperienceLevel::Senior => Some(self.senior_min_years),
            ExperienceLevel::Lead => None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let points = [
            ("skills", self.skills),
            ("job_type", self.job_type),
            ("work_mode", self.work_mode),
            ("location", self.location),
            ("experience", self.experience),
        ];
        for (name, value) in points {
            if !value.is_finite() || value < 0.0 {
                bail!("match weight '{name}' must be a non-negative number, got {value}");
            }
        }
        if (self.sum() - 100.0).abs() > 1e-6 {
            bail!("match weights must sum to 100, got {}", self.sum());
        }
        if self.senior_min_years < self.intermediate_min_years {
            bail!(
                "senior floor ({}) must not be below intermediate floor ({})",
                self.senior_min_years,
                self.intermediate_min_years
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_100() {
        let w = MatchWeights::default();
        assert!((w.sum() - 100.0).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_min_years_per_level() {
        let w = MatchWeights::default();
        assert_eq!(w.min_years(ExperienceLevel::Entry), Some(0));
        assert_eq!(w.min_years(ExperienceLevel::Intermediate), Some(1));
        assert_eq!(w.min_years(ExperienceLevel::Senior), Some(3));
        assert_eq!(w.min_years(ExperienceLevel::Lead), None);
    }

    #[test]
    fn test_validate_rejects_wrong_sum() {
        let w = MatchWeights {
            skills: 50.0,
            ..MatchWeights::default()
        };
        let err = w.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 100"));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let w = MatchWeights {
            skills: 60.0,
            job_type: -20.0,
            work_mode: 30.0,
            location: 15.0,
            experience: 15.0,
            ..MatchWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_floors() {
        let w = MatchWeights {
            intermediate_min_years: 5,
            senior_min_years: 2,
            ..MatchWeights::default()
        };
        assert!(w.validate().is_err());
    }
}
