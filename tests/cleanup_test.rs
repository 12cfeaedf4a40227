use email_cleanup::{
    CleanupError, CleanupOptions, EmailEntry, clean_up_email_list, clean_up_single_address,
};

#[test]
fn test_mixed_text_and_addresses() {
    let list = clean_up_email_list(
        "me@gmail.com, some text, other@gmail.com",
        CleanupOptions::default(),
    )
    .unwrap();

    assert_eq!(list, vec!["me@gmail.com", "other@gmail.com"]);
}

#[test]
fn test_addresses_are_lowercased() {
    let list = clean_up_email_list(
        "aaaaaa.qsd@azeraezr.com, qqqqqqqqq@toto.Com",
        CleanupOptions::default(),
    )
    .unwrap();

    assert_eq!(list, vec!["aaaaaa.qsd@azeraezr.com", "qqqqqqqqq@toto.com"]);
}

#[test]
fn test_angled_display_name_keeps_spacing() {
    let list = clean_up_email_list(
        "toto Shinnigan <toto.shinnigan@gmail.COM>, otherEmail@test.toto",
        CleanupOptions::default(),
    )
    .unwrap();

    assert_eq!(
        list,
        vec![
            "\"toto Shinnigan\" <toto.shinnigan@gmail.com>",
            "otheremail@test.toto"
        ]
    );
}

#[test]
fn test_diacritics_are_folded() {
    let list = clean_up_email_list("òthèrEmaìl@test.tóto", CleanupOptions::default()).unwrap();

    assert_eq!(list, vec!["otheremail@test.toto"]);
}

#[test]
fn test_names_only_with_generated_names() {
    let options = CleanupOptions {
        only_return_names: true,
        add_display_names: true,
        ..CleanupOptions::default()
    };
    let list = clean_up_email_list("rom.vialard@gmail.com", options).unwrap();

    assert_eq!(list, vec!["Rom Vialard"]);
}

#[test]
fn test_quoted_display_name_used_verbatim() {
    let list = clean_up_email_list(
        "garbage \"Ana María\" <ana.maria@example.com>",
        CleanupOptions::default(),
    )
    .unwrap();

    assert_eq!(list, vec!["\"Ana María\" <ana.maria@example.com>"]);
}

#[test]
fn test_no_at_sign_yields_empty_list() {
    let list = clean_up_email_list("just words, no addresses", CleanupOptions::default()).unwrap();

    assert!(list.is_empty());
}

#[test]
fn test_doubled_at_is_collapsed() {
    let list = clean_up_email_list("me@@gmail.com", CleanupOptions::emails_only()).unwrap();

    assert_eq!(list, vec!["me@gmail.com"]);
}

#[test]
fn test_order_preserved_without_deduplication() {
    let list = clean_up_email_list(
        "a@b.com x@y.co a@b.com",
        CleanupOptions::emails_only(),
    )
    .unwrap();

    assert_eq!(list, vec!["a@b.com", "x@y.co", "a@b.com"]);
}

#[test]
fn test_semicolon_and_slash_separators() {
    let list = clean_up_email_list(
        "a@b.com;c@d.org/e@f.net",
        CleanupOptions::emails_only(),
    )
    .unwrap();

    assert_eq!(list, vec!["a@b.com", "c@d.org", "e@f.net"]);
}

#[test]
fn test_domain_literal_is_accepted() {
    let list = clean_up_email_list("ops@[192.168.1.1]", CleanupOptions::emails_only()).unwrap();

    assert_eq!(list, vec!["ops@[192.168.1.1]"]);
}

#[test]
fn test_dotless_domain_is_rejected() {
    let list = clean_up_email_list("user@localhost", CleanupOptions::default()).unwrap();

    assert!(list.is_empty());
}

#[test]
fn test_output_is_idempotent_under_email_only_rerun() {
    let first = clean_up_email_list(
        "toto Shinnigan <toto.shinnigan@gmail.COM>, otherEmail@test.toto",
        CleanupOptions::default(),
    )
    .unwrap();

    for entry in &first {
        let again = clean_up_email_list(entry, CleanupOptions::emails_only()).unwrap();
        assert_eq!(again.len(), 1);
        assert!(entry.to_lowercase().contains(&again[0]));

        let once_more = clean_up_email_list(&again[0], CleanupOptions::emails_only()).unwrap();
        assert_eq!(once_more, again);
    }
}

#[test]
fn test_extracted_addresses_are_ascii_lowercase() {
    let list = clean_up_email_list(
        "Hervé.Dùpont@Exämple.COM, ÒTHÈREMAÌL@TEST.TÓTO",
        CleanupOptions::emails_only(),
    )
    .unwrap();

    assert_eq!(
        list,
        vec!["herve.dupont@example.com", "otheremail@test.toto"]
    );
    for address in &list {
        assert!(address.chars().all(|c| c.is_ascii() && !c.is_uppercase()));
    }
}

#[test]
fn test_conflicting_options_fail_before_processing() {
    let options = CleanupOptions {
        only_return_emails: true,
        add_display_names: true,
        ..CleanupOptions::default()
    };
    let err = clean_up_email_list("a@b.com", options).unwrap_err();
    assert!(matches!(err, CleanupError::ConflictingOptions));

    let options = CleanupOptions {
        only_return_emails: true,
        only_return_names: true,
        ..CleanupOptions::default()
    };
    let err = clean_up_email_list("a@b.com", options).unwrap_err();
    assert!(matches!(err, CleanupError::ConflictingOptions));
}

#[test]
fn test_log_garbage_never_changes_the_result() {
    let input = "junk, @, nope, me@gmail.com, user@localhost";
    let quiet = clean_up_email_list(input, CleanupOptions::default()).unwrap();
    let noisy = clean_up_email_list(
        input,
        CleanupOptions {
            log_garbage: true,
            ..CleanupOptions::default()
        },
    )
    .unwrap();

    assert_eq!(quiet, noisy);
    assert_eq!(quiet, vec!["me@gmail.com"]);
}

#[test]
fn test_single_address_convenience() {
    let found = clean_up_single_address("Contact: John <JOHN@Example.COM> today");
    assert_eq!(found.as_deref(), Some("john@example.com"));

    assert!(clean_up_single_address("no addresses here").is_none());
}

#[test]
fn test_options_from_json_document() {
    let options =
        CleanupOptions::from_json(r#"{"onlyReturnNames": true, "logGarbage": true}"#).unwrap();

    assert!(options.only_return_names);
    assert!(options.log_garbage);
    assert!(!options.only_return_emails);
    assert!(!options.add_display_names);

    let err = CleanupOptions::from_json("definitely not json").unwrap_err();
    assert!(matches!(err, CleanupError::InvalidOptions(_)));
}

#[test]
fn test_email_entry_display() {
    let named = EmailEntry {
        name: Some("Jane Doe".into()),
        address: "jane@example.com".into(),
    };
    assert_eq!(named.to_string(), "\"Jane Doe\" <jane@example.com>");

    let bare = EmailEntry {
        name: None,
        address: "jane@example.com".into(),
    };
    assert_eq!(bare.to_string(), "jane@example.com");
}

#[test]
fn test_email_entry_serde_round_trip() {
    let entry = EmailEntry {
        name: Some("Jane Doe".into()),
        address: "jane@example.com".into(),
    };

    let json = serde_json::to_string(&entry).unwrap();
    let back: EmailEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}
