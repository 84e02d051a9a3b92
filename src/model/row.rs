//! Output tool-table row types and the fixed column schemas.

use crate::config::OUTPUT_UNIT;
use crate::model::tool_type::{LatheToolType, MillToolType};

/// Column names of the milling tool table, in output order.
pub const MILL_HEADERS: [&str; 48] = [
    "type",
    "unit",
    "description",
    "comment",
    "manufacturer",
    "product-id",
    "product-link",
    "number",
    "turret",
    "diameter-offset",
    "length-offset",
    "live-tool",
    "break-control",
    "manual-tool-change",
    "diameter",
    "tip-diameter",
    "tip-length",
    "corner-radius",
    "taper-angle",
    "taper-angle2",
    "flute-length",
    "shoulder-length",
    "shaft-diameter",
    "body-length",
    "overall-length",
    "number-of-flutes",
    "thread-pitch",
    "coolant-support",
    "coolant-mode",
    "material-name",
    "spindle-rpm",
    "ramp-spindle-rpm",
    "clockwise",
    "cutting-feedrate",
    "entry-feedrate",
    "exit-feedrate",
    "plunge-feedrate",
    "ramp-feedrate",
    "retract-feedrate",
    "holder",
    "shaft",
    "guid",
    "holder-description",
    "holder-comment",
    "holder-vendor",
    "holder-product-id",
    "holder-guid",
    "holder-library-name",
];

/// Column names of the turning tool table, in output order.
///
/// Same shape as the mill table minus the diameter-offset/length-offset/
/// live-tool columns, with compensation-offset in their place.
pub const LATHE_HEADERS: [&str; 46] = [
    "type",
    "unit",
    "description",
    "comment",
    "manufacturer",
    "product-id",
    "product-link",
    "number",
    "turret",
    "compensation-offset",
    "break-control",
    "manual-tool-change",
    "diameter",
    "tip-diameter",
    "tip-length",
    "corner-radius",
    "taper-angle",
    "taper-angle2",
    "flute-length",
    "shoulder-length",
    "shaft-diameter",
    "body-length",
    "overall-length",
    "number-of-flutes",
    "thread-pitch",
    "coolant-support",
    "coolant-mode",
    "material-name",
    "spindle-rpm",
    "ramp-spindle-rpm",
    "clockwise",
    "cutting-feedrate",
    "entry-feedrate",
    "exit-feedrate",
    "plunge-feedrate",
    "ramp-feedrate",
    "retract-feedrate",
    "holder",
    "shaft",
    "guid",
    "holder-description",
    "holder-comment",
    "holder-vendor",
    "holder-product-id",
    "holder-guid",
    "holder-library-name",
];

/// One converted milling tool.
///
/// Holds only the fields that vary per tool; the constant columns (offsets,
/// coolant, material, holder placeholders) are inlined by
/// [`to_record`](Self::to_record). All numeric fields are decimal text
/// carried through from the source attributes.
#[derive(Debug, Clone, Default)]
pub struct MillRow {
    pub tool_type: MillToolType,
    pub description: String,
    pub number: String,
    pub diameter: String,
    pub tip_diameter: String,
    pub tip_length: String,
    pub corner_radius: String,
    pub flute_length: String,
    pub shoulder_length: String,
    /// Equal to `diameter`; mills are assumed to have a straight shank.
    pub shaft_diameter: String,
    /// Estimated as 80% of the overall length when that is known.
    pub body_length: String,
    pub overall_length: String,
    pub num_flutes: String,
    pub spindle_rpm: String,
    pub cutting_feedrate: String,
    pub entry_feedrate: String,
    pub exit_feedrate: String,
    pub plunge_feedrate: String,
    /// Brace-delimited uppercase UUID, freshly generated per row.
    pub guid: String,
}

impl MillRow {
    /// Emit the full 48-column record in [`MILL_HEADERS`] order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.tool_type.as_str().to_string(),
            OUTPUT_UNIT.to_string(),
            self.description.clone(),
            format!("Converted from SOLIDWORKS T{}", self.number),
            "SOLIDWORKS".to_string(),
            format!("SW-{}", self.number),
            String::new(), // product-link
            self.number.clone(),
            "0".to_string(), // turret (always 0 for milling)
            "1".to_string(), // diameter-offset
            "1".to_string(), // length-offset
            "no".to_string(), // live-tool
            "no".to_string(), // break-control
            "no".to_string(), // manual-tool-change
            self.diameter.clone(),
            self.tip_diameter.clone(),
            self.tip_length.clone(),
            self.corner_radius.clone(),
            "0".to_string(), // taper-angle
            "0".to_string(), // taper-angle2
            self.flute_length.clone(),
            self.shoulder_length.clone(),
            self.shaft_diameter.clone(),
            self.body_length.clone(),
            self.overall_length.clone(),
            self.num_flutes.clone(),
            "0".to_string(), // thread-pitch (taps not extracted)
            "no".to_string(), // coolant-support
            "flood".to_string(), // coolant-mode
            "hss".to_string(), // material-name
            self.spindle_rpm.clone(),
            self.spindle_rpm.clone(), // ramp-spindle-rpm mirrors spindle-rpm
            "yes".to_string(), // clockwise
            self.cutting_feedrate.clone(),
            self.entry_feedrate.clone(),
            self.exit_feedrate.clone(),
            self.plunge_feedrate.clone(),
            self.cutting_feedrate.clone(), // ramp-feedrate mirrors cutting
            "0".to_string(), // retract-feedrate
            String::new(), // holder
            String::new(), // shaft
            self.guid.clone(),
            String::new(), // holder-description
            String::new(), // holder-comment
            String::new(), // holder-vendor
            String::new(), // holder-product-id
            String::new(), // holder-guid
            String::new(), // holder-library-name
        ]
    }
}

/// One converted turning tool.
///
/// Insert geometry and holder geometry come from two different shape nodes
/// in the source, one nesting level apart.
#[derive(Debug, Clone, Default)]
pub struct LatheRow {
    pub tool_type: LatheToolType,
    /// `"holder name - insert name"`.
    pub description: String,
    /// Also serves as turret position and compensation offset.
    pub number: String,
    /// Nose radius of the insert.
    pub corner_radius: String,
    /// Insert cutting-edge length; mapped to the flute-length column.
    pub insert_edge_length: String,
    /// Parsed from the source but not represented in the table schema.
    pub insert_thickness: String,
    /// Parsed from the source but not represented in the table schema.
    pub insert_nose_angle: String,
    /// Shank height; mapped to the shoulder-length column.
    pub shank_height: String,
    /// Shank width; mapped to the shaft-diameter column.
    pub shank_width: String,
    /// Holder tool length; mapped to the body-length column.
    pub tool_length: String,
    /// Estimated as tool length plus a fixed 20 mm margin.
    pub overall_length: String,
    /// Parsed from the source but not represented in the table schema.
    pub approach_angle: String,
    /// `"1"` for threading tools, `"0"` otherwise.
    pub thread_pitch: String,
    pub spindle_rpm: String,
    /// Single feed value; the lead-in/out and plunge columns mirror it.
    pub cutting_feedrate: String,
    /// Brace-delimited uppercase UUID, freshly generated per row.
    pub guid: String,
}

impl LatheRow {
    /// Emit the full 46-column record in [`LATHE_HEADERS`] order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.tool_type.as_str().to_string(),
            OUTPUT_UNIT.to_string(),
            self.description.clone(),
            format!("Converted from SOLIDWORKS T{}", self.number),
            "SOLIDWORKS".to_string(),
            format!("SW-LATHE-{}", self.number),
            String::new(), // product-link
            self.number.clone(),
            self.number.clone(), // turret matches the tool number
            self.number.clone(), // compensation-offset matches the tool number
            "no".to_string(), // break-control
            "no".to_string(), // manual-tool-change
            "0".to_string(), // diameter (not used for inserts)
            "0".to_string(), // tip-diameter
            "0".to_string(), // tip-length
            self.corner_radius.clone(),
            "0".to_string(), // taper-angle
            "0".to_string(), // taper-angle2
            self.insert_edge_length.clone(), // flute-length column
            self.shank_height.clone(),       // shoulder-length column
            self.shank_width.clone(),        // shaft-diameter column
            self.tool_length.clone(),        // body-length column
            self.overall_length.clone(),
            "1".to_string(), // number-of-flutes (single-edged insert)
            self.thread_pitch.clone(),
            "no".to_string(), // coolant-support
            "flood".to_string(), // coolant-mode
            "carbide".to_string(), // material-name
            self.spindle_rpm.clone(),
            self.spindle_rpm.clone(), // ramp-spindle-rpm mirrors spindle-rpm
            "yes".to_string(), // clockwise
            self.cutting_feedrate.clone(),
            self.cutting_feedrate.clone(), // entry-feedrate
            self.cutting_feedrate.clone(), // exit-feedrate
            self.cutting_feedrate.clone(), // plunge-feedrate
            self.cutting_feedrate.clone(), // ramp-feedrate
            "0".to_string(), // retract-feedrate
            String::new(), // holder
            String::new(), // shaft
            self.guid.clone(),
            String::new(), // holder-description
            String::new(), // holder-comment
            String::new(), // holder-vendor
            String::new(), // holder-product-id
            String::new(), // holder-guid
            String::new(), // holder-library-name
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mill_record_width_matches_headers() {
        let row = MillRow::default();
        assert_eq!(row.to_record().len(), MILL_HEADERS.len());
    }

    #[test]
    fn test_lathe_record_width_matches_headers() {
        let row = LatheRow::default();
        assert_eq!(row.to_record().len(), LATHE_HEADERS.len());
    }

    #[test]
    fn test_mill_record_derived_columns() {
        let row = MillRow {
            number: "7".to_string(),
            spindle_rpm: "4200".to_string(),
            cutting_feedrate: "850".to_string(),
            ..Default::default()
        };
        let rec = row.to_record();
        assert_eq!(rec[3], "Converted from SOLIDWORKS T7");
        assert_eq!(rec[5], "SW-7");
        assert_eq!(rec[8], "0"); // turret stays 0 for milling
        assert_eq!(rec[31], "4200"); // ramp-spindle-rpm mirrors spindle-rpm
        assert_eq!(rec[37], "850"); // ramp-feedrate mirrors cutting-feedrate
    }

    #[test]
    fn test_lathe_number_drives_turret_and_offset() {
        let row = LatheRow {
            number: "3".to_string(),
            ..Default::default()
        };
        let rec = row.to_record();
        assert_eq!(rec[7], "3"); // number
        assert_eq!(rec[8], "3"); // turret
        assert_eq!(rec[9], "3"); // compensation-offset
        assert_eq!(rec[5], "SW-LATHE-3");
    }

    #[test]
    fn test_lathe_feed_mirrors() {
        let row = LatheRow {
            cutting_feedrate: "0.25".to_string(),
            ..Default::default()
        };
        let rec = row.to_record();
        for idx in [31, 32, 33, 34, 35] {
            assert_eq!(rec[idx], "0.25");
        }
        assert_eq!(rec[36], "0"); // retract stays 0
    }
}
