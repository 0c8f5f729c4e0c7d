use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use crate::edit_dialog::{EditDialogState, UpdateRequest};
use crate::entry::{Entry, EntryPatch};
use crate::error::UpdateError;

pub type UpdateFuture = LocalBoxFuture<'static, Result<Option<Entry>, UpdateError>>;

/// Injected update function: `(id, patch) -> Some(entry)` on success, `None`
/// when the data source declines, `Err` when the call itself fails.
///
/// Equality is pointer identity, so it can sit in component props.
#[derive(Clone)]
pub struct OnUpdate(Rc<dyn Fn(String, EntryPatch) -> UpdateFuture>);

impl OnUpdate {
    pub fn new<F, Fut>(update: F) -> Self
    where
        F: Fn(String, EntryPatch) -> Fut + 'static,
        Fut: Future<Output = Result<Option<Entry>, UpdateError>> + 'static,
    {
        Self(Rc::new(move |id, patch| update(id, patch).boxed_local()))
    }

    pub fn call(&self, id: String, patch: EntryPatch) -> UpdateFuture {
        (self.0)(id, patch)
    }
}

impl PartialEq for OnUpdate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnUpdate(..)")
    }
}

/// What a submit attempt ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Draft incomplete, dialog not idle, or an update already in flight
    NotSubmitted,
    Saved(Entry),
    Declined,
}

/// Busy token for one update.
///
/// Holding a ticket means the dialog is `Updating`. Dropping it, whether after
/// [`UpdateTicket::run`] finishes, on an error, or because the future was
/// abandoned, always moves the dialog out of `Updating`.
pub struct UpdateTicket {
    dialog: Rc<RefCell<EditDialogState>>,
    request: UpdateRequest,
    saved: bool,
}

impl UpdateTicket {
    /// Start an update if the dialog allows one
    pub fn acquire(dialog: &Rc<RefCell<EditDialogState>>) -> Option<Self> {
        let request = dialog.borrow_mut().begin_update()?;
        Some(Self {
            dialog: Rc::clone(dialog),
            request,
            saved: false,
        })
    }

    pub fn request(&self) -> &UpdateRequest {
        &self.request
    }

    /// Call `on_update` and settle the dialog.
    ///
    /// A rejected call is returned to the caller unhandled; the dialog still
    /// leaves `Updating` and stays open.
    pub async fn run(mut self, on_update: &OnUpdate) -> Result<SubmitOutcome, UpdateError> {
        let result = on_update
            .call(self.request.id.clone(), self.request.patch.clone())
            .await?;

        match result {
            Some(entry) => {
                self.saved = true;
                Ok(SubmitOutcome::Saved(entry))
            }
            None => Ok(SubmitOutcome::Declined),
        }
    }
}

impl Drop for UpdateTicket {
    fn drop(&mut self) {
        self.dialog.borrow_mut().finish_update(self.saved);
    }
}
