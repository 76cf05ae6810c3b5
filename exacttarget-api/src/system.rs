/// The backend subsystems an envelope can address
///
/// The wire name is used twice: as the `system_name` of a request and as the
/// section element (`exacttarget/system/<name>`) that carries the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    /// Diagnostics - liveness checks
    Diagnostics,

    /// Subscriber - add, delete and retrieve subscribers
    Subscriber,

    /// Job - email sends
    Job,
}

impl System {
    /// The wire name of this system
    pub fn name(&self) -> &'static str {
        match self {
            System::Diagnostics => "diagnostics",
            System::Subscriber => "subscriber",
            System::Job => "job",
        }
    }

    /// Status element inside this system's response section, if it has one
    pub fn info_element(&self) -> Option<&'static str> {
        match self {
            System::Diagnostics => None,
            System::Subscriber => Some("subscriber_info"),
            System::Job => Some("job_info"),
        }
    }

    /// Payload element accompanying a successful status, if it has one
    pub fn description_element(&self) -> Option<&'static str> {
        match self {
            System::Diagnostics => None,
            System::Subscriber => Some("subscriber_description"),
            System::Job => Some("job_description"),
        }
    }
}
