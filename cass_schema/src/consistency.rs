use super::*;

/// Number of replica acknowledgements the engine waits for before a statement
/// is considered successful.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Consistency {
    Any,
    /// A single replica. This is the default for new clients.
    #[default]
    One,
    Two,
    Three,
    Quorum,
    /// Every replica must acknowledge.
    All,
    /// A quorum of replicas in the coordinator's datacenter.
    LocalQuorum,
    EachQuorum,
    LocalOne,
}

impl Consistency {
    /// The level name as written in CQL (`CONSISTENCY LOCAL_QUORUM`).
    pub fn as_cql(&self) -> &'static str {
        match self {
            Consistency::Any => "ANY",
            Consistency::One => "ONE",
            Consistency::Two => "TWO",
            Consistency::Three => "THREE",
            Consistency::Quorum => "QUORUM",
            Consistency::All => "ALL",
            Consistency::LocalQuorum => "LOCAL_QUORUM",
            Consistency::EachQuorum => "EACH_QUORUM",
            Consistency::LocalOne => "LOCAL_ONE",
        }
    }
}

impl Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_cql())?;
        Ok(())
    }
}

/// Map a request's consistency label to an engine level.
/// An absent or empty label yields `default`.
pub fn resolve_consistency(label: Option<&str>, default: Consistency) -> SchemaResult<Consistency> {
    match label {
        None | Some("") => Ok(default),
        Some("all") => Ok(Consistency::All),
        Some("localQuorum") => Ok(Consistency::LocalQuorum),
        Some(other) => Err(SchemaError::validation(format!(
            "Unsupported consistency \"{}\", expected \"all\" or \"localQuorum\"",
            other
        ))),
    }
}
