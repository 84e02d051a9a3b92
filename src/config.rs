//! Named constants and defaults for the converter.
//!
//! The source format resolves almost everything through optional attributes,
//! so every fallback value lives here as a named constant instead of being
//! scattered inline at the lookup sites.

/// Tool-table format version written after the `version` marker line.
pub const TABLE_FORMAT_VERSION: &str = "14";

/// Unit declared in every output row. The source library's actual units are
/// not inspected; this is a documented simplification.
pub const OUTPUT_UNIT: &str = "millimeters";

// CompTool `Type` discriminants in the source tree.

/// Top-level per-tool container entry.
pub const KIND_CONTAINER: &str = "0";
/// Mill definition node; also the lathe insert-definition node.
pub const KIND_DEFINITION: &str = "1";
/// Lathe turning-tool node (holder level, one above the insert).
pub const KIND_TURNING_TOOL: &str = "5";

// Shared defaults.

/// Tool number when the container carries no `ToolNumber` attribute.
pub const DEFAULT_TOOL_NUMBER: &str = "1";
/// Fallback for any dimensional attribute that is absent.
pub const DEFAULT_DIMENSION: &str = "0";

// Mill pipeline defaults.

/// Display name when the definition node has no `Name`.
pub const DEFAULT_MILL_NAME: &str = "Tool";
/// Type code assumed when the definition node has no `ToolType`.
pub const DEFAULT_MILL_TYPE_CODE: &str = "2";
/// Flute count when the shape node is absent or carries no `NumFlutes`.
pub const DEFAULT_NUM_FLUTES: &str = "2";
/// Body length is estimated as this fraction of the overall length.
pub const BODY_LENGTH_FACTOR: f64 = 0.8;
/// Spindle speed (rpm) when no cutting-conditions table is present.
pub const DEFAULT_SPINDLE_RPM: &str = "3500";
/// Cutting feedrate (mm/min) when no cutting-conditions table is present.
pub const DEFAULT_CUTTING_FEEDRATE: &str = "1000";
/// Lead-in/lead-out feedrate (mm/min) default.
pub const DEFAULT_LEAD_FEEDRATE: &str = "100";
/// Plunge (Z) feedrate (mm/min) default.
pub const DEFAULT_PLUNGE_FEEDRATE: &str = "300";

// Lathe pipeline defaults.

/// Display name when the turning-tool node has no `Name`.
pub const DEFAULT_LATHE_NAME: &str = "Lathe Tool";
/// Display name when the insert-definition node has no `Name`.
pub const DEFAULT_INSERT_NAME: &str = "Insert";
/// Type code assumed when the insert definition has no `ToolType`.
pub const DEFAULT_LATHE_TYPE_CODE: &str = "16";
/// Shank height/width (mm) when the holder shape is absent.
pub const DEFAULT_SHANK_HEIGHT: &str = "25";
pub const DEFAULT_SHANK_WIDTH: &str = "25";
/// Holder tool length (mm) default.
pub const DEFAULT_TOOL_LENGTH: &str = "150";
/// Approach angle (degrees) default.
pub const DEFAULT_APPROACH_ANGLE: &str = "95";
/// Overall length is estimated as tool length plus this margin (mm).
pub const OVERALL_LENGTH_MARGIN: f64 = 20.0;
/// Turning feedrate default. Assumed mm/rev (the mill pipeline's feeds are
/// mm/min); the source data does not confirm the unit either way.
pub const DEFAULT_TURNING_FEEDRATE: &str = "0.1";
/// Turning spindle speed (rpm) default.
pub const DEFAULT_TURNING_SPINDLE_RPM: &str = "1000";
/// Thread pitch written for threading-type tools. The actual pitch is not
/// extracted from the source even when present.
pub const DEFAULT_THREAD_PITCH_THREADING: &str = "1";
