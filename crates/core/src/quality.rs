//! Redshift render quality presets.
//!
//! Each preset maps to a fixed sampling/denoising configuration,
//! emitted as a MEL snippet that is prepended to the pre-render
//! script of a submitted job.

use serde::{Deserialize, Serialize};

/// Redshift denoise engine id for OptiX.
pub const OPTIX_DENOISE: i32 = 3;

/// Redshift denoise engine id for "disabled".
pub const DENOISE_OFF: i32 = 0;

/// Render quality preset, ordered from highest quality to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QualityPreset {
    Gt,
    High,
    Medium,
    Low,
    Aggressive,
}

/// Sampling/denoising settings backing one preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSettings {
    pub unified_adaptive_error_threshold: f64,
    pub unified_max_samples: u32,
    pub denoise: bool,
}

impl QualityPreset {
    /// All presets, highest quality first.
    pub const ALL: [QualityPreset; 5] = [
        QualityPreset::Gt,
        QualityPreset::High,
        QualityPreset::Medium,
        QualityPreset::Low,
        QualityPreset::Aggressive,
    ];

    /// All presets ordered for the "submit everything" fan-out:
    /// lowest quality first, ground truth last.
    pub fn all_descending() -> [QualityPreset; 5] {
        [
            QualityPreset::Aggressive,
            QualityPreset::Low,
            QualityPreset::Medium,
            QualityPreset::High,
            QualityPreset::Gt,
        ]
    }

    /// The sampling/denoising settings for this preset.
    pub fn settings(self) -> RenderSettings {
        match self {
            QualityPreset::Gt => RenderSettings {
                unified_adaptive_error_threshold: 0.001,
                unified_max_samples: 2000,
                denoise: true,
            },
            QualityPreset::High => RenderSettings {
                unified_adaptive_error_threshold: 0.015,
                unified_max_samples: 2000,
                denoise: false,
            },
            QualityPreset::Medium => RenderSettings {
                unified_adaptive_error_threshold: 0.025,
                unified_max_samples: 20900,
                denoise: false,
            },
            QualityPreset::Low => RenderSettings {
                unified_adaptive_error_threshold: 0.1,
                unified_max_samples: 2000,
                denoise: false,
            },
            QualityPreset::Aggressive => RenderSettings {
                unified_adaptive_error_threshold: 0.3,
                unified_max_samples: 2000,
                denoise: false,
            },
        }
    }

    /// The preset name as used on the CLI (`GT`, `HIGH`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            QualityPreset::Gt => "GT",
            QualityPreset::High => "HIGH",
            QualityPreset::Medium => "MEDIUM",
            QualityPreset::Low => "LOW",
            QualityPreset::Aggressive => "AGGRESSIVE",
        }
    }

    /// Parse a preset from its CLI name, case-insensitively.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "GT" => Ok(Self::Gt),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            "AGGRESSIVE" => Ok(Self::Aggressive),
            _ => Err(format!(
                "Invalid quality preset '{s}'. Must be one of: {}",
                Self::ALL.map(|p| p.as_str()).join(", ")
            )),
        }
    }

    /// Emit the MEL snippet applying this preset.
    ///
    /// Sets the adaptive error threshold, enables pattern
    /// randomization, caps the sample count, selects the denoise
    /// engine (OptiX when the preset denoises, off otherwise), and
    /// disables the auxiliary AOV channels that would otherwise bloat
    /// the output.
    pub fn render_settings_script(self) -> String {
        let settings = self.settings();
        let denoise_engine = if settings.denoise {
            OPTIX_DENOISE
        } else {
            DENOISE_OFF
        };
        format!(
            concat!(
                "setAttr redshiftOptions.unifiedAdaptiveErrorThreshold {threshold};",
                "setAttr \"redshiftOptions.unifiedRandomizePattern\" 1;",
                "setAttr \"redshiftOptions.unifiedMaxSamples\" {samples};",
                "setAttr redshiftOptions.denoiseEngine {engine};",
                "setAttr rsAov_Cryptomatte.enabled 0;",
                "setAttr rsAov_Custom.enabled 0;",
                "setAttr rsAov_Depth.enabled 0;",
                "setAttr rsAov_PuzzleMatte.enabled 0;",
                "setAttr rsAov_PuzzleMatte1.enabled 0;",
                "setAttr rsAov_WorldPosition.enabled 0;"
            ),
            threshold = settings.unified_adaptive_error_threshold,
            samples = settings.unified_max_samples,
            engine = denoise_engine,
        )
    }
}
