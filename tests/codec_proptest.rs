//! Property-based tests for the name codec and message assembly using proptest

use proptest::prelude::*;
use dnscodec::name::{self, MAX_LABEL_LEN};
use dnscodec::{DNSClass, DNSType, Message, Question, Record, Wire};

// Labels of 1 to 63 bytes, never containing a dot
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{1,63}").unwrap()
}

fn domain_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(label_strategy(), 0..6).prop_map(|labels| labels.join("."))
}

fn type_strategy() -> impl Strategy<Value = DNSType> {
    prop_oneof![
        Just(DNSType::A),
        Just(DNSType::NS),
        Just(DNSType::CNAME),
        Just(DNSType::MX),
        Just(DNSType::TXT),
        Just(DNSType::AAAA),
    ]
}

fn class_strategy() -> impl Strategy<Value = DNSClass> {
    prop_oneof![Just(DNSClass::IN), Just(DNSClass::CH), Just(DNSClass::HS)]
}

fn question_strategy() -> impl Strategy<Value = Question> {
    (domain_name_strategy(), type_strategy(), class_strategy())
        .prop_map(|(domain, qtype, qclass)| Question::new(&domain, qtype, qclass).unwrap())
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        domain_name_strategy(),
        type_strategy(),
        class_strategy(),
        any::<u32>(),
        prop::collection::vec(any::<u8>(), 1..64),
    )
        .prop_map(|(domain, rtype, rclass, ttl, data)| {
            Record::new(&domain, rtype, rclass, ttl, &data).unwrap()
        })
}

fn message_strategy() -> impl Strategy<Value = Message> {
    (
        any::<u16>(),
        0u8..=1,
        0u8..=10,
        prop::collection::vec(question_strategy(), 0..3),
        prop::collection::vec(record_strategy(), 0..3),
        prop::collection::vec(record_strategy(), 0..2),
        prop::collection::vec(record_strategy(), 0..2),
    )
        .prop_map(|(id, qr, rcode, questions, answers, authorities, additionals)| {
            let mut message = Message::new_with_id(id);
            message.flags_mut().set_qr(qr).unwrap();
            message.flags_mut().set_rcode(rcode).unwrap();

            for question in &questions {
                message.add_question(question).unwrap();
            }
            for record in &answers {
                message.add_answer(record).unwrap();
            }
            for record in &authorities {
                message.add_authority(record).unwrap();
            }
            for record in &additionals {
                message.add_additional(record).unwrap();
            }

            message
        })
}

proptest! {
    #[test]
    fn test_name_roundtrip(domain in domain_name_strategy()) {
        let labels = name::encode(&domain).unwrap();
        let expected: usize = domain
            .split('.')
            .filter(|label| !label.is_empty())
            .map(|label| label.len() + 1)
            .sum::<usize>() + 1;

        prop_assert_eq!(labels.len(), expected);
        prop_assert_eq!(name::encoded_len(&labels).unwrap(), labels.len());
        prop_assert_eq!(name::decode(&labels).unwrap(), domain);
    }

    #[test]
    fn test_oversized_label_rejected(len in (MAX_LABEL_LEN + 1)..200usize) {
        let domain = format!("{}.com", "a".repeat(len));

        prop_assert!(name::encode(&domain).is_err());
    }

    #[test]
    fn test_message_roundtrip(message in message_strategy()) {
        let bytes = message.to_bytes().unwrap();

        prop_assert_eq!(bytes.len(), message.wire_len());
        prop_assert_eq!(message.header().question_count as usize, message.questions().len());
        prop_assert_eq!(message.header().answer_count as usize, message.answers().len());

        let decoded = Message::parse(&bytes).unwrap();
        prop_assert_eq!(&decoded, &message);
    }

    #[test]
    fn test_truncated_message_leaves_nothing(message in message_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = message.to_bytes().unwrap();
        let short = &bytes[..cut.index(bytes.len())];

        let mut decoded = message.clone();
        prop_assert!(decoded.deserialize(short).is_err());
        prop_assert_eq!(decoded, Message::new());
    }

    #[test]
    fn test_arbitrary_bytes_never_half_decode(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut decoded = Message::new();

        if decoded.deserialize(&data).is_err() {
            prop_assert_eq!(decoded, Message::new());
        }
    }

    #[test]
    fn test_flag_setters_keep_other_fields(bits in any::<u16>(), rcode in 0u8..=10) {
        let mut message = Message::new();
        *message.flags_mut() = bits.into();
        message.flags_mut().set_rcode(rcode).unwrap();

        prop_assert_eq!(message.flags().rcode(), rcode);
        prop_assert_eq!(message.flags().bits() & 0xFFF0, bits & 0xFFF0);
    }
}
