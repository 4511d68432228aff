#![allow(missing_docs)]

#[cfg(feature = "std")]
#[test]
fn error_impl_std_error_error_test() {
    use gsz::{error, test};
    test::compile_time_assert_std_error_error::<error::Unspecified>();
    test::compile_time_assert_std_error_error::<error::KeyRejected>();
}

#[test]
fn error_display_test() {
    use gsz::{error, stream};

    assert_eq!("gsz::error::Unspecified", format!("{}", error::Unspecified));

    let err = stream::StreamingKey::new(&stream::SNOW3G, &[0; 15], &[0; 16]).unwrap_err();
    assert_eq!("WrongKeyLength", format!("{}", err));
    assert_eq!(error::Unspecified, error::Unspecified::from(err));
}

#[test]
fn send_sync_test() {
    use gsz::{digest, stream, test};

    test::compile_time_assert_send::<digest::Context>();
    test::compile_time_assert_sync::<digest::Context>();
    test::compile_time_assert_send::<digest::Digest>();
    test::compile_time_assert_sync::<digest::Digest>();
    test::compile_time_assert_send::<stream::StreamingKey>();
    test::compile_time_assert_sync::<stream::StreamingKey>();
    test::compile_time_assert_sync::<stream::Algorithm>();
}
