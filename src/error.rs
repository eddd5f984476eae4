use thiserror::Error;

// Errors raised while building a catalog from caller-supplied flights
#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Invalid price for flight {id}: {price}")]
    InvalidPrice { id: String, price: f64 },
}

// Errors raised by the interactive menu
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
