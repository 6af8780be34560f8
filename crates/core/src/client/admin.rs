use tracing::{debug, error, info};

use super::{ACTION_FAILURE_MESSAGE, Dispatch, IgnoreReason, RequestId, SearchClient};
use crate::backend::BackendError;
use crate::model::{AdminAction, Modal, OperationOutcome, PendingConfirmation};
use crate::runtime::CallKind;

impl SearchClient {
	/// Stage `action` for confirmation. Never touches the network.
	///
	/// Delete-entry targets the current search term and is ignored when it is
	/// blank or a dot segment (`.`, `..`) that no delete URL can name.
	///
	/// Staging is otherwise allowed at any time, with one exception: while an
	/// admin call is in flight its outcome already owns the modal slot, and
	/// only `confirm()` may turn a staged confirmation into an outcome. That
	/// rule wins, so staging is refused with [`IgnoreReason::ModalReserved`]
	/// until the outcome has been dismissed. A search in flight does not block
	/// staging.
	pub fn request_action(&mut self, action: AdminAction) -> Result<(), IgnoreReason> {
		if self.state.modal.is_some()
			|| matches!(self.runtime.in_flight_kind(), Some(CallKind::Admin(_)))
		{
			return Err(IgnoreReason::ModalReserved);
		}

		let term = &self.state.query.term;
		let pending = PendingConfirmation::stage(action, term).ok_or(if term.trim().is_empty() {
			IgnoreReason::BlankTerm
		} else {
			IgnoreReason::UnaddressableTerm
		})?;
		debug!(?action, target = ?pending.target_term(), "confirmation staged");
		self.state.modal = Some(Modal::Confirm(pending));
		Ok(())
	}

	/// Execute the staged confirmation.
	///
	/// While another call is in flight the confirmation stays staged and the
	/// call is refused.
	pub fn confirm(&mut self) -> Dispatch {
		let request = match &self.state.modal {
			Some(Modal::Confirm(pending)) => pending.request().clone(),
			_ => return Dispatch::Ignored(IgnoreReason::NothingPending),
		};
		if self.state.is_busy {
			debug!("confirmation held until the in-flight call resolves");
			return Dispatch::Ignored(IgnoreReason::Busy);
		}

		self.state.modal = None;
		self.state.is_busy = true;

		let action = request.action();
		let id = self.runtime.issue_admin(request);
		info!(id, ?action, "admin action dispatched");
		Dispatch::Sent(RequestId(id))
	}

	/// Close the modal, whichever kind it holds. Returns whether anything was
	/// open.
	pub fn cancel(&mut self) -> bool {
		match self.state.modal.take() {
			Some(Modal::Confirm(pending)) => {
				debug!(action = ?pending.action(), "confirmation cancelled");
				true
			}
			Some(Modal::Outcome(_)) => true,
			None => false,
		}
	}

	/// Close an outcome (or a pending confirmation) after the user has read it.
	pub fn dismiss(&mut self) -> bool {
		self.cancel()
	}

	pub(super) fn finish_admin(
		&mut self,
		action: AdminAction,
		result: Result<Option<String>, BackendError>,
	) {
		self.state.is_busy = false;
		let outcome = match result {
			Ok(message) => {
				info!(?action, "admin action succeeded");
				OperationOutcome::success(
					message.unwrap_or_else(|| action.success_fallback().to_string()),
				)
			}
			Err(err) => {
				error!(?action, error = %err, "admin action failed");
				OperationOutcome::failure(
					err.message()
						.map_or_else(|| ACTION_FAILURE_MESSAGE.to_string(), str::to_string),
				)
			}
		};
		self.state.modal = Some(Modal::Outcome(outcome));
	}
}
