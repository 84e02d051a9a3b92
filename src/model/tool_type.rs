//! Closed type-code translation tables for both pipelines.
//!
//! The source format identifies tool families by small integer codes. Each
//! pipeline has its own closed map to the target type names; unknown codes
//! translate to an explicit fallback rather than failing.

use serde::Serialize;

/// Milling tool families the target format understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MillToolType {
    /// Code 20.
    FaceMill,
    /// Code 2; also the fallback for unrecognized codes.
    #[default]
    FlatEndMill,
    /// Code 0.
    Drill,
    /// Code 18.
    CenterDrill,
    /// Code 12.
    Tap,
    /// Code 10.
    ChamferMill,
    /// Code 15.
    BallEndMill,
}

impl MillToolType {
    /// Translate a source type code. Unknown codes fall back to a flat
    /// end mill.
    pub fn from_code(code: &str) -> Self {
        match code {
            "20" => MillToolType::FaceMill,
            "2" => MillToolType::FlatEndMill,
            "0" => MillToolType::Drill,
            "18" => MillToolType::CenterDrill,
            "12" => MillToolType::Tap,
            "10" => MillToolType::ChamferMill,
            "15" => MillToolType::BallEndMill,
            _ => MillToolType::FlatEndMill,
        }
    }

    /// Target-format type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MillToolType::FaceMill => "face mill",
            MillToolType::FlatEndMill => "flat end mill",
            MillToolType::Drill => "drill",
            MillToolType::CenterDrill => "center drill",
            MillToolType::Tap => "tap",
            MillToolType::ChamferMill => "chamfer mill",
            MillToolType::BallEndMill => "ball end mill",
        }
    }

    /// Drill-family tools carry tip-length geometry.
    pub fn is_drill(&self) -> bool {
        matches!(self, MillToolType::Drill | MillToolType::CenterDrill)
    }
}

/// Turning tool families the target format understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LatheToolType {
    /// Code 16; also the fallback for unrecognized codes.
    #[default]
    General,
    /// Code 18.
    Threading,
    /// Code 17.
    Grooving,
    /// Code 19.
    Parting,
    /// Code 20.
    Boring,
}

impl LatheToolType {
    /// Translate a source insert type code. Unknown codes fall back to
    /// general turning.
    pub fn from_code(code: &str) -> Self {
        match code {
            "16" => LatheToolType::General,
            "18" => LatheToolType::Threading,
            "17" => LatheToolType::Grooving,
            "19" => LatheToolType::Parting,
            "20" => LatheToolType::Boring,
            _ => LatheToolType::General,
        }
    }

    /// Target-format type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LatheToolType::General => "turning general",
            LatheToolType::Threading => "turning threading",
            LatheToolType::Grooving => "turning grooving",
            LatheToolType::Parting => "turning parting",
            LatheToolType::Boring => "turning boring",
        }
    }

    /// Threading tools get a non-zero thread-pitch default.
    pub fn is_threading(&self) -> bool {
        matches!(self, LatheToolType::Threading)
    }
}
