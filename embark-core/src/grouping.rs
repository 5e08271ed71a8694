use crate::models::BoardingPass;

/// All boarding passes bought together, as indices into the run's
/// boarding-pass slice. Member order is query order; group order is first
/// appearance in the input, which keeps every downstream iteration
/// deterministic.
#[derive(Debug, Clone)]
pub struct PurchaseGroup {
    pub purchase_id: i64,
    pub members: Vec<usize>,
}

/// Partition boarding passes into purchase groups. Pure and total.
pub fn group_by_purchase(passes: &[BoardingPass]) -> Vec<PurchaseGroup> {
    let mut groups: Vec<PurchaseGroup> = Vec::new();
    for (index, bp) in passes.iter().enumerate() {
        match groups.iter_mut().find(|g| g.purchase_id == bp.purchase_id) {
            Some(group) => group.members.push(index),
            None => groups.push(PurchaseGroup {
                purchase_id: bp.purchase_id,
                members: vec![index],
            }),
        }
    }
    groups
}
