//! End-to-end normalization: raw object body -> record -> descriptor.

use refcheck_core::{parse_annotated_tag, parse_commit, CommitDescriptor, Person};

const MERGE_BODY: &str = "tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
                          parent aaa111\n\
                          parent bbb222\n\
                          author Alice <a@x.com> 1700000000 +0000\n\
                          committer Alice <a@x.com> 1700000000 +0000\n\
                          \n\
                          Merge branch 'topic'\n";

const TAG_BODY: &str = "object aaa111\n\
                        type commit\n\
                        tag v1.0\n\
                        tagger Bob <b@x.com> 1700000000 +0000\n\
                        \n\
                        Release 1.0";

#[test]
fn raw_merge_commit_normalizes_to_merge_descriptor() {
    let record = parse_commit("c1", MERGE_BODY).expect("parse commit");
    let descriptor = CommitDescriptor::from_commit(&record);

    assert_eq!(descriptor.id(), "c1");
    assert!(descriptor.is_merge());
    assert_eq!(
        descriptor.committer().expect("committer"),
        &Person::new("Alice", "a@x.com")
    );
    // The commit path surfaces the body's trailing newline untouched.
    assert_eq!(descriptor.message(), Some("Merge branch 'topic'\n"));
}

#[test]
fn raw_tag_normalizes_to_non_merge_descriptor() {
    let tag = parse_annotated_tag("t1", TAG_BODY).expect("parse tag");
    let descriptor = CommitDescriptor::from_annotated_tag(&tag);

    assert_eq!(descriptor.id(), "t1");
    assert!(!descriptor.is_merge());
    assert_eq!(
        descriptor.committer().expect("tagger"),
        &Person::new("Bob", "b@x.com")
    );
    assert_eq!(descriptor.message(), Some("Release 1.0"));
}

#[test]
fn explicit_fields_canonicalize_where_record_paths_do_not() {
    let record = parse_commit("c1", MERGE_BODY).expect("parse commit");
    let from_record = CommitDescriptor::from_commit(&record);
    let from_fields = CommitDescriptor::from_fields(
        "c1",
        record.committer.clone(),
        Some(record.message.clone()),
        true,
    );

    // Same source message, different canonicalization per path.
    assert_eq!(from_record.message(), Some("Merge branch 'topic'\n"));
    assert_eq!(from_fields.message(), Some("Merge branch 'topic'"));
}

#[test]
fn explicit_fields_accept_absent_message_and_identity() {
    let descriptor = CommitDescriptor::from_fields("c9", None, None, false);

    assert_eq!(descriptor.id(), "c9");
    assert!(descriptor.committer().is_none());
    assert!(descriptor.message().is_none());
    assert!(!descriptor.is_merge());
}
