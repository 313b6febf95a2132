/// Generates a short random identifier such as `id-k3j9x0a2b`
pub fn generate_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("id-{}", &uuid[..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shape() {
        let id = generate_id();
        assert!(id.starts_with("id-"));
        assert_eq!(id.len(), 12);
        assert!(id[3..].chars().all(|c| c.is_ascii_alphanumeric() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }
}
