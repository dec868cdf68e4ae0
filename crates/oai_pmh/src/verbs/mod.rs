mod get_record;
mod identify;
mod list_identifiers;

pub use get_record::GetRecordRequest;
pub use identify::IdentifyRequest;
pub use list_identifiers::ListIdentifiersRequest;
