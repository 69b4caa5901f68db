use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::info;

use crate::entities::{BoxType, Catalog, Container, Instance, Order};
use crate::io::ext_repr::{ExtBoxType, ExtContainer, ExtInstance, ExtOrder};

pub fn import_box_type(id: usize, ext_box_type: &ExtBoxType) -> Result<BoxType> {
    let ExtBoxType {
        name,
        length,
        width,
        height,
    } = ext_box_type;
    BoxType::new(id, name.clone(), *length, *width, *height)
}

pub fn import_catalog(ext_box_types: &[ExtBoxType]) -> Result<Catalog> {
    if ext_box_types.is_empty() {
        info!("no box types defined, using the reference catalog");
        return Ok(Catalog::reference());
    }
    let box_types = ext_box_types
        .iter()
        .enumerate()
        .map(|(id, ebt)| import_box_type(id, ebt))
        .collect::<Result<Vec<BoxType>>>()?;
    Catalog::new(box_types)
}

pub fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    Container::try_new(
        ext_container.length,
        ext_container.width,
        ext_container.height,
    )
}

pub fn import_order(default_id: usize, ext_order: &ExtOrder, catalog: &Catalog) -> Result<Order> {
    let id = ext_order.id.unwrap_or(default_id);
    ensure!(
        ext_order.quantities.len() <= catalog.len(),
        "order {id} has {} columns, but the catalog only has {} box types",
        ext_order.quantities.len(),
        catalog.len()
    );
    Ok(Order::from_row(id, &ext_order.quantities))
}

pub fn import_instance(ext_instance: &ExtInstance) -> Result<Instance> {
    let catalog = import_catalog(&ext_instance.box_types).context("invalid catalog")?;
    let container = match &ext_instance.container {
        Some(ec) => import_container(ec).context("invalid container")?,
        None => Container::REFERENCE,
    };
    let orders = ext_instance
        .orders
        .iter()
        .enumerate()
        .map(|(i, eo)| import_order(i, eo, &catalog))
        .collect::<Result<Vec<Order>>>()?;

    ensure!(
        orders.iter().map(|o| o.id).all_unique(),
        "order ids within an instance must be unique"
    );

    Ok(Instance::new(catalog, container, orders))
}
