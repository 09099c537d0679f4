//! Close values of the two confirmation dialogs. How the dialogs are drawn
//! is up to the embedding UI; the controllers only look at these results.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditConfirmation {
    pub is_edit: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub is_delete: bool,
}
