use mindspace_api::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_and_verify() {
    let hash = hash_password("correct horse battery staple").unwrap();

    assert_ne!(hash, "correct horse battery staple");
    assert!(verify_password("correct horse battery staple", &hash).unwrap());
    assert!(!verify_password("wrong password", &hash).unwrap());
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password("password123").unwrap();
    let second = hash_password("password123").unwrap();

    // bcrypt salts, so hashes differ but both verify.
    assert_ne!(first, second);
    assert!(verify_password("password123", &first).unwrap());
    assert!(verify_password("password123", &second).unwrap());
}

#[test]
fn test_verify_against_garbage_hash_errors() {
    assert!(verify_password("password123", "not-a-bcrypt-hash").is_err());
}
