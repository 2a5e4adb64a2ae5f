#![cfg(feature = "xml")]

mod common;

use std::fmt::Debug;

use aas_model::*;
use aas_serde::xml::{XmlOptions, XmlRoot, from_xml_str, to_xml_string_with};
use aas_serde::{from_json_str, to_json_string, to_json_string_pretty};
use common::{IEC61360_TEMPLATE, PHYSICAL_UNIT_TEMPLATE};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;
use serde::Serialize;
use serde::de::DeserializeOwned;

// ============================================================================
// Strategies
// ============================================================================

/// Text with the characters the XML writer has to escape.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 &<>\"'_.:/-]{0,12}"
}

fn lang_pair() -> impl Strategy<Value = (String, String)> {
    ("[a-z]{2}(-[A-Z]{2})?", text())
}

fn key() -> impl Strategy<Value = Key> {
    (select(KeyTypes::ALL), text()).prop_map(|(key_type, value)| Key::new(key_type, value))
}

fn flat_reference() -> impl Strategy<Value = Reference> {
    (select(ReferenceTypes::ALL), vec(key(), 1..3)).prop_map(|(reference_type, keys)| {
        Reference::builder()
            .reference_type(reference_type)
            .keys(keys)
            .build()
    })
}

fn reference() -> impl Strategy<Value = Reference> {
    (flat_reference(), option::of(flat_reference())).prop_map(|(mut reference, referred)| {
        reference.referred_semantic_id = referred.map(Box::new);
        reference
    })
}

fn extension() -> impl Strategy<Value = Extension> {
    (
        option::of(reference()),
        vec(reference(), 0..2),
        text(),
        option::of(select(DataTypeDefXsd::ALL)),
        option::of(text()),
        vec(reference(), 0..2),
    )
        .prop_map(
            |(semantic_id, supplemental_semantic_ids, name, value_type, value, refers_to)| {
                Extension {
                    semantic_id,
                    supplemental_semantic_ids,
                    name,
                    value_type,
                    value,
                    refers_to,
                }
            },
        )
}

fn qualifier() -> impl Strategy<Value = Qualifier> {
    (
        option::of(reference()),
        vec(reference(), 0..2),
        option::of(select(QualifierKind::ALL)),
        text(),
        select(DataTypeDefXsd::ALL),
        option::of(text()),
        option::of(reference()),
    )
        .prop_map(
            |(semantic_id, supplemental_semantic_ids, kind, qualifier_type, value_type, value, value_id)| {
                Qualifier {
                    semantic_id,
                    supplemental_semantic_ids,
                    kind,
                    qualifier_type,
                    value_type,
                    value,
                    value_id,
                }
            },
        )
}

fn definitions() -> impl Strategy<Value = Vec<LangStringDefinitionTypeIec61360>> {
    vec(
        lang_pair().prop_map(|(language, text)| LangStringDefinitionTypeIec61360::new(language, text)),
        0..2,
    )
}

fn value_list() -> impl Strategy<Value = ValueList> {
    vec(
        (text(), option::of(reference()))
            .prop_map(|(value, value_id)| ValueReferencePair { value, value_id }),
        0..3,
    )
    .prop_map(|value_reference_pairs| ValueList {
        value_reference_pairs,
    })
}

fn level_type() -> impl Strategy<Value = LevelType> {
    any::<(bool, bool, bool, bool)>().prop_map(|(min, nom, typ, max)| LevelType { min, nom, typ, max })
}

fn iec61360() -> impl Strategy<Value = DataSpecificationIec61360> {
    (
        (
            vec(lang_pair(), 1..3),
            vec(lang_pair(), 0..2),
            option::of(text()),
            option::of(reference()),
            option::of(text()),
            option::of(text()),
        ),
        (
            option::of(select(DataTypeIec61360::ALL)),
            definitions(),
            option::of(text()),
            option::of(value_list()),
            option::of(text()),
            option::of(level_type()),
        ),
    )
        .prop_map(
            |(
                (preferred_name, short_name, unit, unit_id, source_of_definition, symbol),
                (data_type, definition, value_format, value_list, value, level_type),
            )| DataSpecificationIec61360 {
                preferred_name: preferred_name
                    .into_iter()
                    .map(|(language, text)| LangStringPreferredNameTypeIec61360::new(language, text))
                    .collect(),
                short_name: short_name
                    .into_iter()
                    .map(|(language, text)| LangStringShortNameTypeIec61360::new(language, text))
                    .collect(),
                unit,
                unit_id,
                source_of_definition,
                symbol,
                data_type,
                definition,
                value_format,
                value_list,
                value,
                level_type,
            },
        )
}

fn physical_unit() -> impl Strategy<Value = DataSpecificationPhysicalUnit> {
    (
        (text(), text(), definitions(), option::of(text()), option::of(text()), option::of(text())),
        (
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
            option::of(text()),
        ),
    )
        .prop_map(
            |(
                (unit_name, unit_symbol, definition, si_notation, si_name, din_notation),
                (
                    ece_name,
                    ece_code,
                    nist_name,
                    source_of_definition,
                    conversion_factor,
                    registration_authority_id,
                    supplier,
                ),
            )| DataSpecificationPhysicalUnit {
                unit_name,
                unit_symbol,
                definition,
                si_notation,
                si_name,
                din_notation,
                ece_name,
                ece_code,
                nist_name,
                source_of_definition,
                conversion_factor,
                registration_authority_id,
                supplier,
            },
        )
}

/// Content always sits under the template reference it belongs to.
fn embedded_data_specification() -> impl Strategy<Value = EmbeddedDataSpecification> {
    prop_oneof![
        option::of(iec61360()).prop_map(|content| EmbeddedDataSpecification {
            data_specification: Reference::external(IEC61360_TEMPLATE),
            data_specification_content: content.map(DataSpecificationContent::from),
        }),
        option::of(physical_unit()).prop_map(|content| EmbeddedDataSpecification {
            data_specification: Reference::external(PHYSICAL_UNIT_TEMPLATE),
            data_specification_content: content.map(DataSpecificationContent::from),
        }),
    ]
}

/// The capability fields shared by every submodel element.
#[derive(Debug, Clone)]
struct Common {
    extensions: Vec<Extension>,
    category: Option<String>,
    id_short: Option<String>,
    display_names: Vec<LangStringNameType>,
    descriptions: Vec<LangStringTextType>,
    semantic_id: Option<Reference>,
    supplemental_semantic_ids: Vec<Reference>,
    qualifiers: Vec<Qualifier>,
    embedded_data_specifications: Vec<EmbeddedDataSpecification>,
}

fn common() -> impl Strategy<Value = Common> {
    (
        vec(extension(), 0..2),
        option::of(text()),
        option::of("[a-zA-Z][a-zA-Z0-9_]{0,8}"),
        vec(lang_pair().prop_map(|(language, text)| LangStringNameType::new(language, text)), 0..2),
        vec(lang_pair().prop_map(|(language, text)| LangStringTextType::new(language, text)), 0..2),
        option::of(reference()),
        vec(reference(), 0..2),
        vec(qualifier(), 0..2),
        vec(embedded_data_specification(), 0..2),
    )
        .prop_map(
            |(
                extensions,
                category,
                id_short,
                display_names,
                descriptions,
                semantic_id,
                supplemental_semantic_ids,
                qualifiers,
                embedded_data_specifications,
            )| Common {
                extensions,
                category,
                id_short,
                display_names,
                descriptions,
                semantic_id,
                supplemental_semantic_ids,
                qualifiers,
                embedded_data_specifications,
            },
        )
}

fn property() -> impl Strategy<Value = Property> {
    (
        common(),
        select(DataTypeDefXsd::ALL),
        option::of(text()),
        option::of(reference()),
    )
        .prop_map(|(common, value_type, value, value_id)| Property {
            extensions: common.extensions,
            category: common.category,
            id_short: common.id_short,
            display_names: common.display_names,
            descriptions: common.descriptions,
            semantic_id: common.semantic_id,
            supplemental_semantic_ids: common.supplemental_semantic_ids,
            qualifiers: common.qualifiers,
            embedded_data_specifications: common.embedded_data_specifications,
            value_type,
            value,
            value_id,
        })
}

fn variables(element: BoxedStrategy<SubmodelElement>) -> BoxedStrategy<Vec<OperationVariable>> {
    vec(
        option::of(element).prop_map(|value| OperationVariable {
            value: value.map(Box::new),
        }),
        0..3,
    )
    .boxed()
}

/// An operation whose variables hold values drawn from `element`.
fn operation_with(element: BoxedStrategy<SubmodelElement>) -> BoxedStrategy<Operation> {
    (
        common(),
        variables(element.clone()),
        variables(element.clone()),
        variables(element),
    )
        .prop_map(
            |(common, input_variables, output_variables, inoutput_variables)| Operation {
                extensions: common.extensions,
                category: common.category,
                id_short: common.id_short,
                display_names: common.display_names,
                descriptions: common.descriptions,
                semantic_id: common.semantic_id,
                supplemental_semantic_ids: common.supplemental_semantic_ids,
                qualifiers: common.qualifiers,
                embedded_data_specifications: common.embedded_data_specifications,
                input_variables,
                output_variables,
                inoutput_variables,
            },
        )
        .boxed()
}

/// Operations whose variables hold properties or operations one level down.
fn operation() -> BoxedStrategy<Operation> {
    let leaf = property().prop_map(SubmodelElement::from).boxed();
    let nested = prop_oneof![
        property().prop_map(SubmodelElement::from),
        operation_with(leaf).prop_map(SubmodelElement::from),
    ]
    .boxed();
    operation_with(nested)
}

// ============================================================================
// Checks
// ============================================================================

fn check_xml_round_trip<T>(value: &T) -> Result<(), TestCaseError>
where
    T: XmlRoot + PartialEq + Debug,
{
    let modes = [
        ("compact", XmlOptions::default()),
        ("indented", XmlOptions::default().with_indent(2)),
    ];
    for (mode, options) in modes {
        let xml = to_xml_string_with(value, &options)
            .map_err(|err| TestCaseError::fail(format!("{mode} write failed: {err}")))?;
        let back: T = from_xml_str(&xml)
            .map_err(|err| TestCaseError::fail(format!("{mode} read failed: {err}\n{xml}")))?;
        prop_assert_eq!(&back, value, "{} XML:\n{}", mode, xml);
    }
    Ok(())
}

fn check_json_round_trip<T>(value: &T) -> Result<(), TestCaseError>
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let compact = to_json_string(value).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let pretty = to_json_string_pretty(value).map_err(|err| TestCaseError::fail(err.to_string()))?;
    for json in [compact, pretty] {
        let back: T = from_json_str(&json)
            .map_err(|err| TestCaseError::fail(format!("read failed: {err}\n{json}")))?;
        prop_assert_eq!(&back, value, "JSON:\n{}", json);
    }
    Ok(())
}

fn check_codecs_agree(op: &Operation) -> Result<(), TestCaseError> {
    let xml = to_xml_string_with(op, &XmlOptions::default()).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let via_xml: Operation = from_xml_str(&xml).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let expected = to_json_string(op).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let actual = to_json_string(&via_xml).map_err(|err| TestCaseError::fail(err.to_string()))?;
    prop_assert_eq!(actual, expected);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_property_xml_round_trip(property in property()) {
        check_xml_round_trip(&property)?;
    }

    #[test]
    fn test_property_json_round_trip(property in property()) {
        check_json_round_trip(&property)?;
    }

    #[test]
    fn test_operation_xml_round_trip(op in operation()) {
        check_xml_round_trip(&op)?;
    }

    #[test]
    fn test_operation_json_round_trip(op in operation()) {
        check_json_round_trip(&op)?;
    }

    #[test]
    fn test_embedded_data_specification_round_trip(eds in embedded_data_specification()) {
        check_json_round_trip(&eds)?;
        let holder = Property {
            embedded_data_specifications: vec![eds],
            ..Property::default()
        };
        check_xml_round_trip(&holder)?;
    }

    #[test]
    fn test_xml_and_json_agree(op in operation()) {
        check_codecs_agree(&op)?;
    }
}
