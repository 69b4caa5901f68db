mod box_type;
mod catalog;
mod container;
mod instance;
mod layout;
mod order;
mod placement;

#[doc(inline)]
pub use box_type::BoxType;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use order::Order;

#[doc(inline)]
pub use placement::Placement;
