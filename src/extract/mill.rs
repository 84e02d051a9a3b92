//! Milling pipeline: extract output rows from a parsed tool library.

use crate::config::{
    DEFAULT_CUTTING_FEEDRATE, DEFAULT_DIMENSION, DEFAULT_LEAD_FEEDRATE, DEFAULT_MILL_NAME,
    DEFAULT_MILL_TYPE_CODE, DEFAULT_NUM_FLUTES, DEFAULT_PLUNGE_FEEDRATE, DEFAULT_SPINDLE_RPM,
    DEFAULT_TOOL_NUMBER, BODY_LENGTH_FACTOR, KIND_CONTAINER, KIND_DEFINITION,
};
use crate::generator::IdGenerator;
use crate::model::{MillRow, MillToolType, ToolNode};
use tracing::debug;

/// Extract one milling row per qualifying tool container.
///
/// Containers without a nested definition entry are skipped silently; the
/// returned count says how many were dropped that way.
pub fn extract_mill_rows(root: &ToolNode, ids: &mut dyn IdGenerator) -> (Vec<MillRow>, usize) {
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for tool in root.comp_tools(KIND_CONTAINER) {
        let number = tool.attr_or("ToolNumber", DEFAULT_TOOL_NUMBER);

        let Some(definition) = tool.find_comp_tool(KIND_DEFINITION) else {
            debug!(tool = %number, "no definition entry, skipping container");
            skipped += 1;
            continue;
        };

        let description = definition.attr_or("Name", DEFAULT_MILL_NAME);
        let type_code = definition.attr_or("ToolType", DEFAULT_MILL_TYPE_CODE);
        let tool_type = MillToolType::from_code(&type_code);

        let mut row = MillRow {
            tool_type,
            description,
            number,
            diameter: DEFAULT_DIMENSION.to_string(),
            tip_diameter: DEFAULT_DIMENSION.to_string(),
            tip_length: DEFAULT_DIMENSION.to_string(),
            corner_radius: DEFAULT_DIMENSION.to_string(),
            flute_length: DEFAULT_DIMENSION.to_string(),
            shoulder_length: DEFAULT_DIMENSION.to_string(),
            shaft_diameter: DEFAULT_DIMENSION.to_string(),
            body_length: DEFAULT_DIMENSION.to_string(),
            overall_length: DEFAULT_DIMENSION.to_string(),
            num_flutes: DEFAULT_NUM_FLUTES.to_string(),
            spindle_rpm: DEFAULT_SPINDLE_RPM.to_string(),
            cutting_feedrate: DEFAULT_CUTTING_FEEDRATE.to_string(),
            entry_feedrate: DEFAULT_LEAD_FEEDRATE.to_string(),
            exit_feedrate: DEFAULT_LEAD_FEEDRATE.to_string(),
            plunge_feedrate: DEFAULT_PLUNGE_FEEDRATE.to_string(),
            guid: ids.next_id(),
        };

        read_geometry(definition, &mut row);
        read_cutting_conditions(definition, &mut row);

        rows.push(row);
    }

    (rows, skipped)
}

/// `Val` attribute of a direct child of a `LenParams` element.
fn len_param(len_params: &ToolNode, name: &str) -> Option<String> {
    len_params
        .children
        .iter()
        .find(|c| c.tag == name)
        .and_then(|c| c.attr("Val"))
        .map(str::to_string)
}

/// Fill dimensional fields from the definition's shape entry, if present.
fn read_geometry(definition: &ToolNode, row: &mut MillRow) {
    let Some(shape) = definition.find_descendant("Shape") else {
        return;
    };

    if let Some(len_params) = shape.find_descendant("LenParams") {
        if let Some(diameter) = len_param(len_params, "D") {
            // Straight-shank assumption: shaft diameter equals the
            // cutting diameter.
            row.shaft_diameter = diameter.clone();
            row.diameter = diameter;
        }
        if let Some(radius) = len_param(len_params, "R") {
            row.corner_radius = radius;
        }
        if let Some(cutting_length) = len_param(len_params, "CL") {
            row.flute_length = cutting_length;
        }
        if let Some(shoulder_length) = len_param(len_params, "SL") {
            row.shoulder_length = shoulder_length;
        }
        if let Some(total_length) = len_param(len_params, "TL") {
            // Body length is an estimate, not measured data.
            if let Ok(value) = total_length.parse::<f64>() {
                row.body_length = format!("{}", value * BODY_LENGTH_FACTOR);
            }
            row.overall_length = total_length;
        }
        if row.tool_type.is_drill() {
            if let Some(tip_length) = len_param(len_params, "TipL") {
                row.tip_length = tip_length;
            }
        }
    }

    row.num_flutes = shape.attr_or("NumFlutes", DEFAULT_NUM_FLUTES);
}

/// Fill feed and spindle fields from the definition's cutting-conditions
/// table, if present.
fn read_cutting_conditions(definition: &ToolNode, row: &mut MillRow) {
    let Some(milling) = definition
        .find_descendant("CuttingConditionsList")
        .and_then(|list| list.find_descendant("CC"))
        .and_then(|cc| cc.find_descendant("MillingFeedSpin"))
    else {
        return;
    };

    if let Some(feeds) = milling.find_descendant("Feeds") {
        row.cutting_feedrate = feeds.attr_or("Normal", DEFAULT_CUTTING_FEEDRATE);
        row.entry_feedrate = feeds.attr_or("LeadIn", DEFAULT_LEAD_FEEDRATE);
        row.exit_feedrate = feeds.attr_or("LeadOut", DEFAULT_LEAD_FEEDRATE);
        row.plunge_feedrate = feeds.attr_or("Z", DEFAULT_PLUNGE_FEEDRATE);
    }

    if let Some(spins) = milling.find_descendant("Spins") {
        row.spindle_rpm = spins.attr_or("Rate", DEFAULT_SPINDLE_RPM);
    }
}
