use serde::{Deserialize, Serialize};

use crate::geometry::CropRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CropPreset {
    #[default]
    Free,
    Original,
    Ratio16x9,
    Ratio4x3,
    Ratio1x1,
    Ratio9x16,
}

impl CropPreset {
    pub const ALL: [CropPreset; 6] = [
        Self::Free,
        Self::Original,
        Self::Ratio16x9,
        Self::Ratio4x3,
        Self::Ratio1x1,
        Self::Ratio9x16,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Original => "Original",
            Self::Ratio16x9 => "16:9",
            Self::Ratio4x3 => "4:3",
            Self::Ratio1x1 => "1:1",
            Self::Ratio9x16 => "9:16",
        }
    }

    pub const fn ratio(self) -> Option<(u32, u32)> {
        match self {
            Self::Free | Self::Original => None,
            Self::Ratio16x9 => Some((16, 9)),
            Self::Ratio4x3 => Some((4, 3)),
            Self::Ratio1x1 => Some((1, 1)),
            Self::Ratio9x16 => Some((9, 16)),
        }
    }

    /// Effective aspect ratio; `Original` uses the video dimensions.
    pub fn resolve_ratio(self, video_width: u32, video_height: u32) -> Option<(u32, u32)> {
        self.ratio().or_else(|| {
            if self == Self::Original {
                Some((video_width.max(1), video_height.max(1)))
            } else {
                None
            }
        })
    }

    /// Largest centered rectangle with this preset's ratio in video pixels.
    pub fn initial_rect(self, video_width: u32, video_height: u32) -> CropRect {
        if video_width == 0 || video_height == 0 {
            return CropRect::FULL;
        }
        let Some((ratio_x, ratio_y)) = self.resolve_ratio(video_width, video_height) else {
            return CropRect::FULL;
        };
        let video_aspect = f64::from(video_width) / f64::from(video_height);
        let target_aspect = f64::from(ratio_x) / f64::from(ratio_y);
        if target_aspect >= video_aspect {
            let height = video_aspect / target_aspect;
            CropRect::new(0.0, (1.0 - height) / 2.0, 1.0, height)
        } else {
            let width = target_aspect / video_aspect;
            CropRect::new((1.0 - width) / 2.0, 0.0, width, 1.0)
        }
    }
}
