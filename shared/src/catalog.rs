use crate::{Plant, Point, Result};

/// The plant currently being dragged from the sidebar, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    dragged: Option<Plant>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged(&self) -> Option<&Plant> {
        self.dragged.as_ref()
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
    }
}

/// Configured plants, split into the sidebar (unplaced) and the board (placed).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlantCatalog {
    unplaced: Vec<Plant>,
    placed: Vec<Plant>,
}

impl PlantCatalog {
    pub fn new(plants: Vec<Plant>) -> Self {
        let (placed, unplaced) = plants.into_iter().partition(Plant::is_placed);
        Self { unplaced, placed }
    }

    pub fn unplaced(&self) -> &[Plant] {
        &self.unplaced
    }

    pub fn placed(&self) -> &[Plant] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.unplaced.len() + self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_plant(&mut self, mut plant: Plant) {
        plant.position = None;
        self.unplaced.push(plant);
    }

    /// Marks the sidebar plant at `index` as dragged. Returns false when the
    /// index is out of range, leaving `drag` untouched.
    pub fn begin_drag(&self, drag: &mut DragState, index: usize) -> bool {
        let Some(plant) = self.unplaced.get(index) else {
            return false;
        };
        log::debug!("dragging plant {:?}", plant.name);
        drag.dragged = Some(plant.clone());
        true
    }

    /// Places the dragged plant at `point` and clears the drag. Without an
    /// active drag the catalog is unchanged.
    pub fn drop_at(&mut self, drag: &mut DragState, point: Point) -> Option<&Plant> {
        let dragged = drag.dragged.take()?;
        let Some(index) = self
            .unplaced
            .iter()
            .position(|plant| plant.same_record(&dragged))
        else {
            log::warn!("dropped plant {:?} is no longer in the sidebar", dragged.name);
            return None;
        };
        let mut plant = self.unplaced.remove(index);
        plant.position = Some(point);
        log::debug!("placed {:?} at ({}, {})", plant.name, point.x, point.y);
        self.placed.push(plant);
        self.placed.last()
    }

    /// Every record in storage form, sidebar first.
    pub fn to_json(&self) -> Result<String> {
        let records: Vec<&Plant> = self.unplaced.iter().chain(self.placed.iter()).collect();
        Ok(serde_json::to_string(&records)?)
    }

    /// Adds `plant` to the catalog serialized in `stored` and returns the new
    /// serialized form. Unreadable stored data is replaced.
    pub fn append_to_stored(stored: Option<&str>, plant: Plant) -> Result<String> {
        let mut catalog = load_catalog(stored);
        catalog.add_plant(plant);
        catalog.to_json()
    }
}

pub fn parse_catalog(text: &str) -> Result<Vec<Plant>> {
    Ok(serde_json::from_str(text)?)
}

/// Builds the catalog from stored JSON. Missing or malformed data yields an
/// empty catalog.
pub fn load_catalog(stored: Option<&str>) -> PlantCatalog {
    let Some(text) = stored else {
        log::debug!("no stored catalog, starting empty");
        return PlantCatalog::default();
    };
    match parse_catalog(text) {
        Ok(plants) => {
            log::debug!("loaded {} plants", plants.len());
            PlantCatalog::new(plants)
        }
        Err(error) => {
            log::warn!("{error}; starting with an empty catalog");
            PlantCatalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn basil() -> Plant {
        Plant::new("Basil").with_color("#00ff00")
    }

    #[test]
    fn drop_moves_dragged_plant_to_board() {
        let mut catalog = PlantCatalog::new(vec![basil()]);
        let mut drag = DragState::default();
        assert!(catalog.begin_drag(&mut drag, 0));

        let placed = catalog.drop_at(&mut drag, Point::new(150.0, 200.0)).cloned();

        let mut expected = basil();
        expected.position = Some(Point::new(150.0, 200.0));
        assert_eq!(placed, Some(expected.clone()));
        assert!(catalog.unplaced().is_empty());
        assert_eq!(catalog.placed(), &[expected]);
        assert!(!drag.is_active());
    }

    #[test]
    fn drop_without_drag_is_noop() {
        let mut catalog = PlantCatalog::new(vec![basil()]);
        let before = catalog.clone();
        let mut drag = DragState::default();
        assert!(catalog.drop_at(&mut drag, Point::new(1.0, 1.0)).is_none());
        assert_eq!(catalog, before);
    }

    #[test]
    fn second_drop_after_placement_is_noop() {
        let mut catalog = PlantCatalog::new(vec![basil(), Plant::new("Mint")]);
        let mut drag = DragState::default();
        catalog.begin_drag(&mut drag, 1);
        catalog.drop_at(&mut drag, Point::new(5.0, 5.0));
        let after_first = catalog.clone();

        assert!(catalog.drop_at(&mut drag, Point::new(9.0, 9.0)).is_none());
        assert_eq!(catalog, after_first);
        assert_eq!(catalog.unplaced(), &[basil()]);
    }

    #[test]
    fn begin_drag_out_of_range_leaves_state() {
        let catalog = PlantCatalog::new(vec![basil()]);
        let mut drag = DragState::default();
        assert!(!catalog.begin_drag(&mut drag, 3));
        assert!(!drag.is_active());
    }

    #[test]
    fn duplicate_names_place_one_at_a_time() {
        let mut catalog = PlantCatalog::default();
        catalog.add_plant(basil());
        catalog.add_plant(basil());
        let mut drag = DragState::default();
        catalog.begin_drag(&mut drag, 1);
        catalog.drop_at(&mut drag, Point::new(0.0, 0.0));
        assert_eq!(catalog.unplaced().len(), 1);
        assert_eq!(catalog.placed().len(), 1);
    }

    #[test]
    fn stale_drag_is_cleared_without_mutation() {
        let mut catalog = PlantCatalog::new(vec![basil()]);
        let mut drag = DragState::default();
        catalog.begin_drag(&mut drag, 0);
        let mut other = DragState::default();
        catalog.begin_drag(&mut other, 0);
        catalog.drop_at(&mut other, Point::new(1.0, 1.0));
        let before = catalog.clone();

        assert!(catalog.drop_at(&mut drag, Point::new(2.0, 2.0)).is_none());
        assert!(!drag.is_active());
        assert_eq!(catalog, before);
    }

    #[test]
    fn load_without_stored_data_is_empty() {
        assert!(load_catalog(None).is_empty());
    }

    #[test]
    fn load_with_malformed_data_is_empty() {
        assert!(load_catalog(Some("not json")).is_empty());
        assert!(load_catalog(Some("{\"name\":\"Basil\"}")).is_empty());
        assert!(parse_catalog("[1, 2]").is_err());
    }

    #[test]
    fn load_reads_storage_layout() {
        let stored = r##"[
            {"name":"Basil","image":"/basil.png","description":"herb","color":"#00ff00"},
            {"name":"Oak","image":"","description":"tree","extra":true}
        ]"##;
        let catalog = load_catalog(Some(stored));
        assert_eq!(catalog.unplaced().len(), 2);
        assert_eq!(catalog.unplaced()[0].color.as_deref(), Some("#00ff00"));
        assert_eq!(catalog.unplaced()[1].color, None);
        assert!(catalog.placed().is_empty());
    }

    #[test]
    fn missing_image_and_description_default_to_empty() {
        let plants = parse_catalog(r#"[{"name":"Sage"}]"#).unwrap();
        assert_eq!(plants, vec![Plant::new("Sage")]);
    }

    #[test]
    fn storage_form_omits_positions() {
        let mut catalog = PlantCatalog::new(vec![basil()]);
        let mut drag = DragState::default();
        catalog.begin_drag(&mut drag, 0);
        catalog.drop_at(&mut drag, Point::new(3.0, 4.0));

        let json = catalog.to_json().unwrap();
        assert_eq!(
            json,
            r##"[{"name":"Basil","image":"","description":"","color":"#00ff00"}]"##
        );
    }

    #[test]
    fn append_to_stored_replaces_unreadable_data() {
        let json = PlantCatalog::append_to_stored(Some("garbage"), Plant::new("Kale")).unwrap();
        assert_eq!(parse_catalog(&json).unwrap(), vec![Plant::new("Kale")]);

        let json = PlantCatalog::append_to_stored(Some(&json), basil()).unwrap();
        assert_eq!(
            parse_catalog(&json).unwrap(),
            vec![Plant::new("Kale"), basil()]
        );
    }
}
