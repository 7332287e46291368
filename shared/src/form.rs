use crate::{random_color, sanitize_color, Error, Plant, Result};

/// Raw values from the plant configuration form.
#[derive(Clone, Debug, Default)]
pub struct PlantForm {
    pub name: String,
    pub width: String,
    pub color: String,
}

impl PlantForm {
    /// Validates the form. A blank color is replaced by `random_color(random24)`.
    pub fn into_plant(self, random24: u32) -> Result<Plant> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::MissingName);
        }
        let width = self
            .width
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|width| width.is_finite() && *width > 0.0)
            .ok_or_else(|| Error::InvalidWidth(self.width.clone()))?;
        let color = sanitize_color(&self.color)?.unwrap_or_else(|| random_color(random24));

        let mut plant = Plant::new(name).with_color(color);
        plant.width = Some(width);
        plant.description = format!("{width} m wide");
        Ok(plant)
    }
}
