//! Stateless dropdown toggle.
//!
//! A trigger click toggles the dropped class on the last child of the
//! trigger's parent (the droppable region). The class list is the only state.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::ClassList;
use crate::error::{CarouselError, CarouselResult};

pub const DROPDOWN_TRIGGER_CLASS: &str = "dropdown__trigger";
pub const DROPDOWN_DROPPABLE_CLASS: &str = "dropdown__droppable";
pub const DROPDOWN_DROPPED_CLASS: &str = "dropdown__droppable--dropped";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropdownToggle {
    Dropped,
    Collapsed,
    /// The last child is not a droppable region; nothing changed.
    Ignored,
}

/// Toggles the dropped class on a droppable region's class list.
pub fn toggle_dropped(droppable: &mut ClassList) -> DropdownToggle {
    if !droppable.contains(DROPDOWN_DROPPABLE_CLASS) {
        return DropdownToggle::Ignored;
    }
    if droppable.toggle(DROPDOWN_DROPPED_CLASS) {
        DropdownToggle::Dropped
    } else {
        DropdownToggle::Collapsed
    }
}

/// One trigger together with the children of its parent element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownRegion {
    pub trigger: ClassList,
    /// Children of the trigger's parent in document order.
    pub siblings: Vec<ClassList>,
}

impl DropdownRegion {
    /// Conventional markup: a trigger followed by a collapsed droppable.
    #[must_use]
    pub fn standard() -> Self {
        let trigger = ClassList::new().with_class(DROPDOWN_TRIGGER_CLASS);
        Self {
            siblings: vec![
                trigger.clone(),
                ClassList::new().with_class(DROPDOWN_DROPPABLE_CLASS),
            ],
            trigger,
        }
    }

    #[must_use]
    pub fn droppable(&self) -> Option<&ClassList> {
        self.siblings.last()
    }

    #[must_use]
    pub fn is_dropped(&self) -> bool {
        self.droppable()
            .is_some_and(|droppable| droppable.contains(DROPDOWN_DROPPED_CLASS))
    }
}

/// Dropdowns wired once per page from explicitly supplied regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownSet {
    regions: Vec<DropdownRegion>,
}

impl DropdownSet {
    /// Wires every region whose trigger carries the trigger marker class.
    pub fn new(regions: Vec<DropdownRegion>) -> CarouselResult<Self> {
        if let Some(position) = regions
            .iter()
            .position(|region| !region.trigger.contains(DROPDOWN_TRIGGER_CLASS))
        {
            return Err(CarouselError::InvalidInput(format!(
                "dropdown region {position} trigger lacks `{DROPDOWN_TRIGGER_CLASS}`"
            )));
        }
        Ok(Self { regions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[must_use]
    pub fn region(&self, trigger: usize) -> Option<&DropdownRegion> {
        self.regions.get(trigger)
    }

    /// Handles a click on trigger `trigger`.
    pub fn click_trigger(&mut self, trigger: usize) -> CarouselResult<DropdownToggle> {
        let Some(region) = self.regions.get_mut(trigger) else {
            return Err(CarouselError::InvalidInput(format!(
                "dropdown trigger {trigger} does not exist"
            )));
        };
        let Some(droppable) = region.siblings.last_mut() else {
            warn!(trigger, "dropdown trigger has no sibling region; click ignored");
            return Ok(DropdownToggle::Ignored);
        };

        let toggle = toggle_dropped(droppable);
        if toggle == DropdownToggle::Ignored {
            warn!(
                trigger,
                classes = %droppable.to_attribute(),
                "last sibling is not a droppable region; click ignored"
            );
        } else {
            trace!(trigger, ?toggle, "dropdown toggled");
        }
        Ok(toggle)
    }
}
