//! Unit converter tools category definition.

use crate::domains::catalog::model::{Category, Tool};
use crate::domains::catalog::slug::slugify;

/// Category display name.
pub const NAME: &str = "📏 Unit Converter Tools";

/// Build the category with its authored tool list.
pub fn category() -> Category {
    let slug = slugify(NAME);
    let tool = |name: &str, icon: &str, page: &str| {
        Tool::new(name, icon, format!("tools/{}/{}", slug, page))
    };

    Category::new(
        NAME,
        "bi-rulers",
        vec![
            tool("Length Converter", "bi-arrows-fullscreen", "length-converter.html"),
            tool("Weight Converter", "bi-box-fill", "weight-converter.html"),
            tool("Temperature Converter", "bi-thermometer-half", "temperature-converter.html"),
            tool("Volume Converter", "bi-funnel-fill", "volume-converter.html"),
            tool("Speed Converter", "bi-sign-turn-right-fill", "speed-converter.html"),
            tool("Area Converter", "bi-textarea-resize", "area-converter.html"),
            tool("Pressure Converter", "bi-speedometer", "pressure-converter.html"),
            tool("Energy Converter", "bi-fire", "energy-converter.html"),
            tool("Data Storage Converter", "bi-device-hdd-fill", "data-storage-converter.html"),
            tool("Fuel Efficiency Converter", "bi-ev-station-fill", "fuel-efficiency-converter.html"),
            tool("Angle Converter", "bi-triangle-half", "angle-converter.html"),
            tool("Time Zone Converter", "bi-globe-americas", "time-zone-converter.html"),
            tool("Recipe Converter", "bi-egg-fried", "recipe-converter.html"),
            tool("Roman Numeral Converter", "bi-bank2", "roman-numeral-converter.html"),
            tool("Number Base Converter", "bi-hash", "number-base-converter.html"),
            tool("Unit Prefix Converter", "bi-infinity", "scientific-unit-prefix-converter.html"),
        ],
    )
}
