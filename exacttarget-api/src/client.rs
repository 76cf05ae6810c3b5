use tracing::{debug, trace, Level};
use xml_client::{XmlClient, XmlClientConfig};

use crate::attribute::Attributes;
use crate::operations::diagnostics::{PingOperation, PingRequest};
use crate::operations::job::{SendSingleOperation, SendSingleRequest};
use crate::operations::subscriber::{
    AddSubscriberOperation, AddSubscriberRequest, DeleteSubscriberOperation,
    DeleteSubscriberRequest, RetrieveSubscriberOperation, RetrieveSubscriberRequest, Subscriber,
    ALL_SUBSCRIBERS_LIST,
};
use crate::response::parse_document;
use crate::{ApiError, Credentials, ExactTargetOperation, Result};

/// A client for the ExactTarget XML API
///
/// Holds the account credentials for its whole lifetime and nothing else;
/// every call is one independent request/response exchange (sending by
/// email address is the one exception and makes exactly two).
///
/// ```rust,no_run
/// use exacttarget_api::{Attributes, Credentials, ExactTargetClient};
///
/// let client = ExactTargetClient::new(Credentials::new("user", "password"));
/// if client.check_online()? {
///     let attributes = Attributes::new().text("first name", "Jo");
///     client.add_subscriber("jo@example.com", "123", &attributes)?;
/// }
/// # Ok::<(), exacttarget_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExactTargetClient {
    credentials: Credentials,
    xml_client: XmlClient,
}

/// Parameters for [`ExactTargetClient::send_to_subscriber`]
///
/// `email_id` is required, plus at least one of `subscriber_id` and
/// `email_address`. A known subscriber id wins over the address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendToSubscriber {
    pub email_id: String,
    pub subscriber_id: Option<String>,
    pub email_address: Option<String>,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
}

impl SendToSubscriber {
    pub fn new(email_id: impl Into<String>) -> Self {
        Self {
            email_id: email_id.into(),
            ..Self::default()
        }
    }

    pub fn with_subscriber_id(mut self, subscriber_id: impl Into<String>) -> Self {
        self.subscriber_id = Some(subscriber_id.into());
        self
    }

    pub fn with_email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    pub fn with_sender(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self.sender_email = Some(email.into());
        self
    }
}

impl ExactTargetClient {
    /// Create a client for the production endpoint
    pub fn new(credentials: Credentials) -> Self {
        Self::with_xml_client(credentials, XmlClient::new())
    }

    /// Create a client with a custom transport (endpoint, timeouts)
    pub fn with_xml_client(credentials: Credentials, xml_client: XmlClient) -> Self {
        Self {
            credentials,
            xml_client,
        }
    }

    /// Create a client from `EXACTTARGET_USERNAME`, `EXACTTARGET_PASSWORD`
    /// and the optional `EXACTTARGET_ENDPOINT`
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_xml_client(
            Credentials::from_env()?,
            XmlClient::with_config(XmlClientConfig::from_env()),
        ))
    }

    /// Execute a single operation
    ///
    /// Builds the envelope, posts it, and parses the answer. Transport and
    /// parse failures are errors; application-level failures come back in
    /// the operation's response value.
    pub fn execute<Op: ExactTargetOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let system = Op::SYSTEM.name();
        let action = Op::ACTION;

        let document = Op::build_envelope(&self.credentials, request)?.to_xml()?;
        debug!(system, action, bytes = document.len(), "envelope built");
        if tracing::enabled!(Level::TRACE) {
            let redacted = Op::build_envelope(&self.credentials.redacted(), request)?.to_xml()?;
            trace!(system, action, document = %redacted, "envelope");
        }

        let body = self.xml_client.post(&document)?;
        debug!(system, action, bytes = body.len(), "raw response received");
        trace!(system, action, body = %body, "response");

        let xml = parse_document(&body)?;
        Op::parse_response(&xml)
    }

    /// Whether the API reports itself as running
    pub fn check_online(&self) -> Result<bool> {
        self.execute::<PingOperation>(&PingRequest)
    }

    /// Add or update a subscriber on a list
    ///
    /// The address and `status=active` are always sent ahead of `attributes`.
    /// Returns the server's subscriber description, or `None` when the
    /// server did not confirm the add.
    pub fn add_subscriber(
        &self,
        email: &str,
        list_id: &str,
        attributes: &Attributes,
    ) -> Result<Option<String>> {
        self.execute::<AddSubscriberOperation>(&AddSubscriberRequest {
            email: email.to_string(),
            list_id: list_id.to_string(),
            attributes: attributes.clone(),
        })
    }

    /// Remove a subscriber from one list; `false` if the server did not confirm
    pub fn delete_subscriber_from_list(&self, email: &str, list_id: &str) -> Result<bool> {
        self.execute::<DeleteSubscriberOperation>(&DeleteSubscriberRequest::FromList {
            email: email.to_string(),
            list_id: list_id.to_string(),
        })
    }

    /// Delete a subscriber by id; `false` if the server did not confirm
    ///
    /// Only the id goes on the wire, the address is used for logging.
    pub fn delete_subscriber(&self, email: &str, subscriber_id: &str) -> Result<bool> {
        debug!(email, subscriber_id, "deleting subscriber");
        self.execute::<DeleteSubscriberOperation>(&DeleteSubscriberRequest::ById {
            subscriber_id: subscriber_id.to_string(),
        })
    }

    /// The subscriber's record on the "All Subscribers" list, if any
    pub fn retrieve_subscriber(&self, email: &str, list_id: Option<&str>) -> Result<Option<Subscriber>> {
        Ok(self
            .retrieve_subscribers(email, list_id)?
            .into_iter()
            .find(|subscriber| subscriber.list_name() == Some(ALL_SUBSCRIBERS_LIST)))
    }

    /// Every record the server returns for `email`, in the order received
    pub fn retrieve_subscribers(&self, email: &str, list_id: Option<&str>) -> Result<Vec<Subscriber>> {
        let subscribers = self.execute::<RetrieveSubscriberOperation>(&RetrieveSubscriberRequest {
            email: email.to_string(),
            list_id: list_id.map(str::to_string),
        })?;
        debug!(email, count = subscribers.len(), "retrieved subscribers");
        Ok(subscribers)
    }

    /// Look up the subscriber id for an email address
    pub fn resolve_subscriber_id(&self, email: &str) -> Result<String> {
        let subscriber = self.retrieve_subscriber(email, None)?;
        let subscriber_id = subscriber
            .as_ref()
            .and_then(Subscriber::subscriber_id)
            .map(str::to_string);
        debug!(email, subscriber_id = ?subscriber_id, "resolved subscriber");

        subscriber_id.ok_or_else(|| ApiError::SubscriberNotFound(email.to_string()))
    }

    /// Send one email to one subscriber
    ///
    /// When only the address is known, the subscriber id is resolved first
    /// with a retrieve call; if that finds nothing the send is not attempted
    /// and [`ApiError::SubscriberNotFound`] is returned. Returns the job
    /// description, or `None` when the server did not create the job.
    pub fn send_to_subscriber(&self, send: &SendToSubscriber) -> Result<Option<String>> {
        let email_id = non_blank(Some(send.email_id.as_str())).ok_or(ApiError::MissingParameter("email_id"))?;

        let subscriber_id = match (
            non_blank(send.subscriber_id.as_deref()),
            non_blank(send.email_address.as_deref()),
        ) {
            (Some(id), _) => id.to_string(),
            (None, Some(email)) => self.resolve_subscriber_id(email)?,
            (None, None) => {
                return Err(ApiError::MissingParameter("subscriber_id or email_address"))
            }
        };

        self.execute::<SendSingleOperation>(&SendSingleRequest {
            email_id: email_id.to_string(),
            subscriber_id,
            sender_name: send.sender_name.clone(),
            sender_email: send.sender_email.clone(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
