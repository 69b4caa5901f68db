use std::sync::Arc;

use anyhow::{Result, ensure};

use crate::entities::BoxType;
use crate::util::assertions;

/// Read-only collection of all box types that can be ordered.
/// The id of every [`BoxType`] equals its index in the catalog.
#[derive(Clone, Debug)]
pub struct Catalog {
    box_types: Vec<Arc<BoxType>>,
}

impl Catalog {
    pub fn new(box_types: Vec<BoxType>) -> Result<Self> {
        ensure!(
            assertions::catalog_ids_correct(&box_types),
            "box type ids do not match their index in the catalog"
        );
        Ok(Catalog {
            box_types: box_types.into_iter().map(Arc::new).collect(),
        })
    }

    /// Catalog of cartons used by the original order data, indexed in the same column order.
    pub fn reference() -> Self {
        let entries = [
            ("BELDOOS", 349, 246, 62),
            ("DOOS VAN DALE 2", 350, 255, 220),
            ("DOOSGR", 455, 310, 200),
            ("DOOSGRS", 455, 300, 200),
            ("DOOSKL", 455, 300, 135),
            ("DOOSKLS", 455, 300, 80),
            ("DOOSMIS", 455, 300, 133),
            ("IM DOOS GROOT", 375, 260, 130),
            ("IM DOOS KLEIN", 375, 260, 30),
            ("IM EDU GROOT", 375, 260, 130),
        ];
        let box_types = entries
            .into_iter()
            .enumerate()
            .map(|(id, (name, l, w, h))| {
                BoxType::new(id, name, l, w, h).expect("reference catalog has positive dimensions")
            })
            .collect();
        Catalog::new(box_types).expect("reference catalog ids are consecutive")
    }

    pub fn box_type(&self, id: usize) -> Option<&Arc<BoxType>> {
        self.box_types.get(id)
    }

    pub fn len(&self) -> usize {
        self.box_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.box_types.is_empty()
    }
}
