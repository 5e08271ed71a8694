use std::collections::{HashMap, HashSet};

/// Static cabin geometry for one aircraft type: seat columns grouped into
/// physical sections, plus the set of column pairs that sit next to each
/// other (no aisle between them).
#[derive(Debug, Clone)]
pub struct CabinLayout {
    pub sections: Vec<Vec<char>>,
    adjacent: HashSet<(char, char)>,
}

impl CabinLayout {
    pub fn new(sections: Vec<Vec<char>>, adjacent: &[(char, char)]) -> Self {
        Self {
            sections,
            adjacent: adjacent.iter().copied().collect(),
        }
    }

    /// Whether two columns are physically next to each other. The relation
    /// is stored as unordered pairs, so both orientations are checked.
    pub fn are_adjacent(&self, a: char, b: char) -> bool {
        self.adjacent.contains(&(a, b)) || self.adjacent.contains(&(b, a))
    }
}

/// Registry mapping aircraft ids to their cabin layouts. Built once at
/// startup and passed into the allocator, so new aircraft types and
/// synthetic test layouts plug in without touching the algorithm.
///
/// An aircraft id with no registered layout resolves to the fallback
/// layout. That keeps check-in working for unmodeled aircraft at the cost
/// of possibly wrong adjacency pairing, so the lookup logs a warning.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: HashMap<i64, CabinLayout>,
    fallback: CabinLayout,
}

impl LayoutRegistry {
    pub fn new(fallback: CabinLayout) -> Self {
        Self {
            layouts: HashMap::new(),
            fallback,
        }
    }

    pub fn register(&mut self, airplane_id: i64, layout: CabinLayout) {
        self.layouts.insert(airplane_id, layout);
    }

    pub fn get(&self, airplane_id: i64) -> Option<&CabinLayout> {
        self.layouts.get(&airplane_id)
    }

    /// Layout for the given aircraft, or the fallback when none is known.
    pub fn layout_for(&self, airplane_id: i64) -> &CabinLayout {
        match self.layouts.get(&airplane_id) {
            Some(layout) => layout,
            None => {
                tracing::warn!(airplane_id, "no cabin layout registered, using fallback");
                &self.fallback
            }
        }
    }
}

impl Default for LayoutRegistry {
    /// The two aircraft types currently in the fleet. Aircraft 1 doubles
    /// as the fallback for unknown ids.
    fn default() -> Self {
        let aircraft_1 = CabinLayout::new(
            vec![vec!['A', 'B', 'C'], vec!['E', 'F', 'G']],
            &[('A', 'B'), ('B', 'C'), ('E', 'F'), ('F', 'G')],
        );
        let aircraft_2 = CabinLayout::new(
            vec![vec!['A', 'B'], vec!['D', 'E', 'F'], vec!['H', 'I']],
            &[('A', 'B'), ('D', 'E'), ('E', 'F'), ('H', 'I')],
        );

        let mut registry = Self::new(aircraft_1.clone());
        registry.register(1, aircraft_1);
        registry.register(2, aircraft_2);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_unordered() {
        let layout = CabinLayout::new(vec![vec!['A', 'B']], &[('A', 'B')]);
        assert!(layout.are_adjacent('A', 'B'));
        assert!(layout.are_adjacent('B', 'A'));
        assert!(!layout.are_adjacent('A', 'C'));
    }

    #[test]
    fn test_default_registry_layouts() {
        let registry = LayoutRegistry::default();

        let one = registry.get(1).expect("aircraft 1 registered");
        assert!(one.are_adjacent('B', 'C'));
        // C and E sit across the aisle
        assert!(!one.are_adjacent('C', 'E'));

        let two = registry.get(2).expect("aircraft 2 registered");
        assert!(two.are_adjacent('D', 'E'));
        assert!(!two.are_adjacent('B', 'D'));
    }

    #[test]
    fn test_unknown_aircraft_falls_back_to_aircraft_1() {
        let registry = LayoutRegistry::default();
        assert!(registry.get(99).is_none());

        let layout = registry.layout_for(99);
        assert!(layout.are_adjacent('A', 'B'));
        // D only exists on aircraft 2, so the fallback must not pair it
        assert!(!layout.are_adjacent('D', 'E'));
    }
}
