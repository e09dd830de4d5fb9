use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, info, warn};

use super::{FetchTicket, Mutation};
use crate::api::{ApiError, DictionaryApi};

pub(crate) enum ApiCommand {
	Search { ticket: FetchTicket },
	Mutate { id: u64, kind: Mutation, word: String },
	Shutdown,
}

pub(crate) enum ApiReply {
	Search {
		ticket: FetchTicket,
		result: Result<Vec<String>, ApiError>,
	},
	Mutate {
		id: u64,
		kind: Mutation,
		word: String,
		result: Result<(), ApiError>,
	},
}

/// Move `api` behind a dispatcher thread. Every command runs on its own
/// thread, so a slow search never holds up an add or a remove.
pub(crate) fn spawn<A: DictionaryApi>(api: A) -> (Sender<ApiCommand>, Receiver<ApiReply>) {
	let (command_tx, command_rx) = mpsc::channel::<ApiCommand>();
	let (reply_tx, reply_rx) = mpsc::channel::<ApiReply>();
	let api = Arc::new(api);

	thread::spawn(move || {
		while let Ok(command) = command_rx.recv() {
			if matches!(command, ApiCommand::Shutdown) {
				break;
			}
			let api = Arc::clone(&api);
			let reply_tx = reply_tx.clone();
			thread::spawn(move || {
				if let Some(reply) = serve(api.as_ref(), command) {
					// The coordinator is gone; nobody is waiting for this reply.
					let _ = reply_tx.send(reply);
				}
			});
		}
		debug!("request worker stopped");
	});

	(command_tx, reply_rx)
}

fn serve<A: DictionaryApi>(api: &A, command: ApiCommand) -> Option<ApiReply> {
	match command {
		ApiCommand::Shutdown => None,
		ApiCommand::Search { ticket } => {
			debug!(key = %ticket.key, id = ticket.id, "searching");
			let result = api.search(ticket.key.value());
			if let Err(err) = &result {
				warn!(key = %ticket.key, error = %err, "search failed");
			}
			Some(ApiReply::Search { ticket, result })
		}
		ApiCommand::Mutate { id, kind, word } => {
			let result = match kind {
				Mutation::Add => api.add(&word),
				Mutation::Remove => api.remove(&word),
			};
			match &result {
				Ok(()) => info!(operation = kind.as_str(), %word, "dictionary updated"),
				Err(err) => {
					warn!(operation = kind.as_str(), %word, error = %err, "dictionary update failed")
				}
			}
			Some(ApiReply::Mutate {
				id,
				kind,
				word,
				result,
			})
		}
	}
}
