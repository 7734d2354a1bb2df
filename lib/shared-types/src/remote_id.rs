use crate::macros::impls_for_remote_id;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct VerificationId(String);

impls_for_remote_id!(VerificationId);

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct LoanId(String);

impls_for_remote_id!(LoanId);

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct LoanProductId(String);

impls_for_remote_id!(LoanProductId);

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct UserId(String);

impls_for_remote_id!(UserId);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_remote_id_accepts_string_and_number() {
        let from_string: LoanId = serde_json::from_str("\"L1\"").unwrap();
        assert_eq!(from_string.as_str(), "L1");

        let from_number: LoanId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number.to_string(), "42");
    }

    #[test]
    fn test_remote_id_serializes_as_string() {
        let id = UserId::from("u2");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u2\"");
    }
}
