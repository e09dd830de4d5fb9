/// Lifecycle of a single request or of the latest request of one kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
	#[default]
	Idle,
	Pending,
	Success,
	Error,
}

impl RequestState {
	pub fn is_pending(self) -> bool {
		self == Self::Pending
	}

	pub fn is_error(self) -> bool {
		self == Self::Error
	}
}

/// The two operations that change the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
	Add,
	Remove,
}

impl Mutation {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Add => "add",
			Self::Remove => "remove",
		}
	}
}

/// State of the most recently started mutation of one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationStatus {
	pub state: RequestState,
	pub word: Option<String>,
	pub error: Option<String>,
}

impl MutationStatus {
	pub(crate) fn start(&mut self, word: &str) {
		self.state = RequestState::Pending;
		self.word = Some(word.to_string());
		self.error = None;
	}

	pub(crate) fn succeed(&mut self) {
		self.state = RequestState::Success;
		self.error = None;
	}

	pub(crate) fn fail(&mut self, message: String) {
		self.state = RequestState::Error;
		self.error = Some(message);
	}
}
