use command_use_case::{add_product, remove_product, update_product_amount};

/// Failure categories reported to the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notification {
    AddFailed,
    OutOfStock,
    RemoveFailed,
    UpdateFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::AddFailed => "Failed to add product",
            Notification::OutOfStock => "Requested quantity is out of stock",
            Notification::RemoveFailed => "Failed to remove product",
            Notification::UpdateFailed => "Failed to update product amount",
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.message().fmt(f)
    }
}

impl From<&add_product::Error> for Notification {
    fn from(error: &add_product::Error) -> Self {
        match error {
            add_product::Error::StockExceeded(_) => Notification::OutOfStock,
            _ => Notification::AddFailed,
        }
    }
}

impl From<&remove_product::Error> for Notification {
    fn from(_: &remove_product::Error) -> Self {
        Notification::RemoveFailed
    }
}

impl From<&update_product_amount::Error> for Notification {
    fn from(error: &update_product_amount::Error) -> Self {
        match error {
            update_product_amount::Error::StockExceeded(_) => Notification::OutOfStock,
            _ => Notification::UpdateFailed,
        }
    }
}
