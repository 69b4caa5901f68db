use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Result, bail};

use crate::entities::{BoxType, Catalog};

/// Requested quantities of box types, keyed by their index in the [`Catalog`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Order {
    pub id: usize,
    quantities: BTreeMap<usize, usize>,
}

impl Order {
    pub fn new(id: usize, quantities: BTreeMap<usize, usize>) -> Self {
        Order { id, quantities }
    }

    /// Builds an order from a row of an order table.
    /// Column `j` holds the count of box type `j`.
    pub fn from_row(id: usize, row: &[usize]) -> Self {
        let quantities = row
            .iter()
            .enumerate()
            .filter(|(_, qty)| **qty > 0)
            .map(|(j, qty)| (j, *qty))
            .collect();
        Order { id, quantities }
    }

    pub fn qty(&self, box_type_id: usize) -> usize {
        self.quantities.get(&box_type_id).copied().unwrap_or(0)
    }

    pub fn total_qty(&self) -> usize {
        self.quantities.values().sum()
    }

    /// Same order with every quantity multiplied by `factor`
    pub fn scaled(&self, factor: usize) -> Order {
        let quantities = self
            .quantities
            .iter()
            .map(|(id, qty)| (*id, qty * factor))
            .collect();
        Order {
            id: self.id,
            quantities,
        }
    }

    /// Expands the order into a flat sequence of box instances, in ascending catalog index.
    /// Every instance shares the [`BoxType`] entry of the catalog.
    pub fn expand(&self, catalog: &Catalog) -> Result<Vec<Arc<BoxType>>> {
        let mut boxes = Vec::with_capacity(self.total_qty());
        for (&id, &qty) in self.quantities.iter() {
            let Some(box_type) = catalog.box_type(id) else {
                bail!(
                    "order {} refers to box type {id}, but the catalog only has {} entries",
                    self.id,
                    catalog.len()
                );
            };
            boxes.extend(std::iter::repeat_n(box_type, qty).cloned());
        }
        Ok(boxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_repeats_shared_box_types() {
        let catalog = Catalog::reference();
        let order = Order::from_row(0, &[2, 0, 1]);
        let boxes = order.expand(&catalog).unwrap();

        assert_eq!(boxes.len(), 3);
        assert_eq!(order.total_qty(), 3);
        assert_eq!(boxes[0].name, "BELDOOS");
        assert_eq!(boxes[2].name, "DOOSGR");
        assert!(Arc::ptr_eq(&boxes[0], &boxes[1]));
        assert!(Arc::ptr_eq(&boxes[0], catalog.box_type(0).unwrap()));
    }

    #[test]
    fn unknown_box_type_is_an_error() {
        let catalog = Catalog::reference();
        let order = Order::new(7, BTreeMap::from([(42, 1)]));
        assert!(order.expand(&catalog).is_err());
    }

    #[test]
    fn empty_order_expands_to_nothing() {
        let order = Order::from_row(0, &[0, 0, 0]);
        assert!(order.expand(&Catalog::reference()).unwrap().is_empty());
    }
}
