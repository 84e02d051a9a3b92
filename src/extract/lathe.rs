//! Turning pipeline: extract output rows from a parsed tool library.
//!
//! Lathe tools nest one level deeper than mill tools: the container holds a
//! turning-tool entry (the holder), which in turn holds an insert
//! definition. Holder geometry and insert geometry live in two different
//! shape entries, one nesting level apart.

use crate::config::{
    DEFAULT_APPROACH_ANGLE, DEFAULT_DIMENSION, DEFAULT_INSERT_NAME, DEFAULT_LATHE_NAME,
    DEFAULT_LATHE_TYPE_CODE, DEFAULT_SHANK_HEIGHT, DEFAULT_SHANK_WIDTH,
    DEFAULT_THREAD_PITCH_THREADING, DEFAULT_TOOL_LENGTH, DEFAULT_TOOL_NUMBER,
    DEFAULT_TURNING_FEEDRATE, DEFAULT_TURNING_SPINDLE_RPM, KIND_CONTAINER, KIND_DEFINITION,
    KIND_TURNING_TOOL, OVERALL_LENGTH_MARGIN,
};
use crate::generator::IdGenerator;
use crate::model::{LatheRow, LatheToolType, ToolNode};
use tracing::debug;

/// Extract one turning row per qualifying tool container.
///
/// A container qualifies only with the full nesting chain
/// container -> turning tool -> insert definition; anything less is skipped
/// silently and counted.
pub fn extract_lathe_rows(root: &ToolNode, ids: &mut dyn IdGenerator) -> (Vec<LatheRow>, usize) {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for tool in root.comp_tools(KIND_CONTAINER) {
        let number = tool.attr_or("ToolNumber", DEFAULT_TOOL_NUMBER);

        let Some(turning_tool) = tool.find_comp_tool(KIND_TURNING_TOOL) else {
            debug!(tool = %number, "no turning-tool entry, skipping container");
            skipped += 1;
            continue;
        };

        let Some(insert) = turning_tool.find_comp_tool(KIND_DEFINITION) else {
            debug!(tool = %number, "no insert definition, skipping container");
            skipped += 1;
            continue;
        };

        let tool_name = turning_tool.attr_or("Name", DEFAULT_LATHE_NAME);
        let insert_name = insert.attr_or("Name", DEFAULT_INSERT_NAME);
        let type_code = insert.attr_or("ToolType", DEFAULT_LATHE_TYPE_CODE);
        let tool_type = LatheToolType::from_code(&type_code);

        let thread_pitch = if tool_type.is_threading() {
            // The actual pitch is never read from the source, even when
            // present there.
            DEFAULT_THREAD_PITCH_THREADING.to_string()
        } else {
            DEFAULT_DIMENSION.to_string()
        };

        let mut row = LatheRow {
            tool_type,
            description: format!("{tool_name} - {insert_name}"),
            number,
            corner_radius: DEFAULT_DIMENSION.to_string(),
            insert_edge_length: DEFAULT_DIMENSION.to_string(),
            insert_thickness: DEFAULT_DIMENSION.to_string(),
            insert_nose_angle: DEFAULT_DIMENSION.to_string(),
            shank_height: DEFAULT_SHANK_HEIGHT.to_string(),
            shank_width: DEFAULT_SHANK_WIDTH.to_string(),
            tool_length: DEFAULT_TOOL_LENGTH.to_string(),
            overall_length: String::new(),
            approach_angle: DEFAULT_APPROACH_ANGLE.to_string(),
            thread_pitch,
            spindle_rpm: DEFAULT_TURNING_SPINDLE_RPM.to_string(),
            cutting_feedrate: DEFAULT_TURNING_FEEDRATE.to_string(),
            guid: ids.next_id(),
        };

        read_insert_geometry(insert, &mut row);
        read_holder_geometry(turning_tool, &mut row);
        read_turning_conditions(insert, &mut row);

        // Overall length is an additive estimate over the holder length.
        row.overall_length = match row.tool_length.parse::<f64>() {
            Ok(value) => format!("{}", value + OVERALL_LENGTH_MARGIN),
            Err(_) => DEFAULT_DIMENSION.to_string(),
        };

        debug!(
            tool = %row.number,
            thickness = %row.insert_thickness,
            nose_angle = %row.insert_nose_angle,
            approach = %row.approach_angle,
            "insert/holder angles have no output column"
        );

        rows.push(row);
    }

    (rows, skipped)
}

/// Fill insert fields from the insert definition's shape entry.
fn read_insert_geometry(insert: &ToolNode, row: &mut LatheRow) {
    let Some(shape) = insert.find_descendant("Shape") else {
        return;
    };
    row.corner_radius = shape.attr_or("InsertCornerRadius", DEFAULT_DIMENSION);
    row.insert_edge_length = shape.attr_or("InsertCuttingEdgeLength", DEFAULT_DIMENSION);
    row.insert_thickness = shape.attr_or("InsertThickness", DEFAULT_DIMENSION);
    row.insert_nose_angle = shape.attr_or("InsertNoseAngle", DEFAULT_DIMENSION);
}

/// Fill holder fields from the turning-tool entry's shape entry.
///
/// First-match lookup over all descendants of the turning tool: when the
/// insert definition comes first in document order, its shape wins. That
/// matches the original path-query behavior and must stay that way.
fn read_holder_geometry(turning_tool: &ToolNode, row: &mut LatheRow) {
    let Some(shape) = turning_tool.find_descendant("Shape") else {
        return;
    };
    row.shank_height = shape.attr_or("ShankHeight", DEFAULT_SHANK_HEIGHT);
    row.shank_width = shape.attr_or("ShankWidth", DEFAULT_SHANK_WIDTH);
    row.tool_length = shape.attr_or("ToolLength", DEFAULT_TOOL_LENGTH);
    row.approach_angle = shape.attr_or("ApproachAngleGUI", DEFAULT_APPROACH_ANGLE);
}

/// Fill feed and spindle fields from the insert's turning feed table.
fn read_turning_conditions(insert: &ToolNode, row: &mut LatheRow) {
    let Some(turning) = insert
        .find_descendant("CC")
        .and_then(|cc| cc.find_descendant("TurningFeedSpin"))
    else {
        return;
    };

    if let Some(feeds) = turning.find_descendant("Feeds") {
        row.cutting_feedrate = feeds.attr_or("Normal", DEFAULT_TURNING_FEEDRATE);
    }
    if let Some(spins) = turning.find_descendant("Spins") {
        row.spindle_rpm = spins.attr_or("Normal", DEFAULT_TURNING_SPINDLE_RPM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SequentialIds;
    use crate::parser::parse_tlm_str;
    use pretty_assertions::assert_eq;

    fn extract(xml: &str) -> (Vec<LatheRow>, usize) {
        let root = parse_tlm_str(xml).unwrap();
        let mut ids = SequentialIds::new();
        extract_lathe_rows(&root, &mut ids)
    }

    #[test]
    fn test_full_turning_tool_extraction() {
        let (rows, skipped) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0" ToolNumber="3">
                   <CompTool Type="5" Name="MCLNR 2525">
                     <Shape ShankHeight="20" ShankWidth="20"
                            ToolLength="125" ApproachAngleGUI="93"/>
                     <CompTool Type="1" Name="CNMG 1204" ToolType="16">
                       <Shape InsertCornerRadius="0.8"
                              InsertCuttingEdgeLength="12"
                              InsertThickness="4.76"
                              InsertNoseAngle="80"/>
                       <CC>
                         <TurningFeedSpin>
                           <Feeds Normal="0.2"/>
                           <Spins Normal="1500"/>
                         </TurningFeedSpin>
                       </CC>
                     </CompTool>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );

        assert_eq!(skipped, 0);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.tool_type, LatheToolType::General);
        assert_eq!(row.description, "MCLNR 2525 - CNMG 1204");
        assert_eq!(row.number, "3");
        assert_eq!(row.corner_radius, "0.8");
        assert_eq!(row.insert_edge_length, "12");
        assert_eq!(row.insert_thickness, "4.76");
        assert_eq!(row.insert_nose_angle, "80");
        assert_eq!(row.shank_height, "20");
        assert_eq!(row.shank_width, "20");
        assert_eq!(row.tool_length, "125");
        assert_eq!(row.overall_length, "145");
        assert_eq!(row.approach_angle, "93");
        assert_eq!(row.cutting_feedrate, "0.2");
        assert_eq!(row.spindle_rpm, "1500");
        assert_eq!(row.thread_pitch, "0");
    }

    #[test]
    fn test_incomplete_nesting_chain_is_skipped() {
        let (rows, skipped) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0" ToolNumber="1"/>
                 <CompTool Type="0" ToolNumber="2">
                   <CompTool Type="5" Name="Holder Only"/>
                 </CompTool>
                 <CompTool Type="0" ToolNumber="3">
                   <CompTool Type="5">
                     <CompTool Type="1" Name="Insert"/>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(skipped, 2);
        assert_eq!(rows[0].number, "3");
    }

    #[test]
    fn test_defaults_without_shapes_or_feeds() {
        let (rows, _) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0">
                   <CompTool Type="5">
                     <CompTool Type="1"/>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );
        let row = &rows[0];
        assert_eq!(row.description, "Lathe Tool - Insert");
        assert_eq!(row.number, "1");
        assert_eq!(row.corner_radius, "0");
        assert_eq!(row.shank_height, "25");
        assert_eq!(row.shank_width, "25");
        assert_eq!(row.tool_length, "150");
        assert_eq!(row.overall_length, "170");
        assert_eq!(row.cutting_feedrate, "0.1");
        assert_eq!(row.spindle_rpm, "1000");
    }

    #[test]
    fn test_threading_tool_gets_pitch_default() {
        let (rows, _) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0">
                   <CompTool Type="5">
                     <CompTool Type="1" ToolType="18"/>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );
        assert_eq!(rows[0].tool_type, LatheToolType::Threading);
        assert_eq!(rows[0].tool_type.as_str(), "turning threading");
        assert_eq!(rows[0].thread_pitch, "1");
    }

    #[test]
    fn test_unknown_insert_code_falls_back_to_general() {
        let (rows, _) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0">
                   <CompTool Type="5">
                     <CompTool Type="1" ToolType="99"/>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );
        assert_eq!(rows[0].tool_type, LatheToolType::General);
    }

    #[test]
    fn test_insert_shape_wins_when_it_comes_first() {
        // Document order decides which Shape the holder lookup finds. With
        // the insert definition first, its shape shadows the holder shape;
        // the original converter behaved the same way.
        let (rows, _) = extract(
            r#"<TLMDoc>
                 <CompTool Type="0">
                   <CompTool Type="5">
                     <CompTool Type="1">
                       <Shape InsertCornerRadius="0.4" ToolLength="999"/>
                     </CompTool>
                     <Shape ToolLength="125"/>
                   </CompTool>
                 </CompTool>
               </TLMDoc>"#,
        );
        assert_eq!(rows[0].tool_length, "999");
        assert_eq!(rows[0].overall_length, "1019");
    }
}
