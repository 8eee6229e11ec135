pub mod animal_form;
pub mod animal_table;
pub mod animal_view_container;

pub use animal_form::AnimalForm;
pub use animal_table::AnimalTable;
pub use animal_view_container::AnimalViewContainer;
