use crate::entities::{Catalog, Container, Order};

/// Static representation of a batch of orders to be packed:
/// a catalog of box types, the container they are packed into and the orders themselves.
#[derive(Clone, Debug)]
pub struct Instance {
    pub catalog: Catalog,
    pub container: Container,
    pub orders: Vec<Order>,
}

impl Instance {
    pub fn new(catalog: Catalog, container: Container, orders: Vec<Order>) -> Self {
        Instance {
            catalog,
            container,
            orders,
        }
    }

    pub fn total_box_qty(&self) -> usize {
        self.orders.iter().map(|o| o.total_qty()).sum()
    }
}
