mod common;

use aas_model::*;
use aas_serde::{
    Result, SerdeError, from_json_slice, from_json_str, from_json_value, to_json_string,
    to_json_string_pretty, to_json_value, to_json_vec,
};
use common::*;
use serde_json::json;

#[test]
fn test_calc_operation_json() -> Result<()> {
    let value = to_json_value(&calc_operation())?;
    assert_eq!(
        value,
        json!({
            "idShort": "calc",
            "inputVariables": [
                {
                    "value": {
                        "modelType": "Property",
                        "idShort": "x",
                        "valueType": "xs:string"
                    }
                }
            ]
        })
    );

    let back: Operation = from_json_value(value)?;
    assert_eq!(back, calc_operation());
    Ok(())
}

#[test]
fn test_full_operation_round_trip() -> Result<()> {
    let op = full_operation();

    let compact = to_json_string(&op)?;
    let back: Operation = from_json_str(&compact)?;
    assert_eq!(back, op);

    let pretty = to_json_string_pretty(&op)?;
    assert!(pretty.contains('\n'));
    let back: Operation = from_json_str(&pretty)?;
    assert_eq!(back, op);

    let bytes = to_json_vec(&op)?;
    let back: Operation = from_json_slice(&bytes)?;
    assert_eq!(back, op);
    Ok(())
}

#[test]
fn test_empty_values_are_omitted() -> Result<()> {
    assert_eq!(to_json_value(&Operation::default())?, json!({}));
    assert_eq!(
        to_json_value(&Property::default())?,
        json!({ "valueType": "xs:string" })
    );

    let empty: Operation = from_json_str("{}")?;
    assert_eq!(empty, Operation::default());
    Ok(())
}

#[test]
fn test_capability_field_names() -> Result<()> {
    let value = to_json_value(&full_operation())?;
    let mut keys: Vec<&str> = value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default();
    keys.sort_unstable();
    let mut expected = vec![
        "extensions",
        "category",
        "idShort",
        "displayName",
        "description",
        "semanticId",
        "supplementalSemanticIds",
        "qualifiers",
        "embeddedDataSpecifications",
        "inputVariables",
        "outputVariables",
        "inoutputVariables",
    ];
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(value["displayName"][1], json!({ "language": "de", "text": "Berechnen" }));
    assert_eq!(
        value["semanticId"]["referredSemanticId"]["keys"][0],
        json!({ "type": "GlobalReference", "value": "urn:example:referred" })
    );
    Ok(())
}

#[test]
fn test_submodel_element_model_type() -> Result<()> {
    let nested = to_json_value(&full_operation())?;
    assert_eq!(
        nested["inoutputVariables"][0]["value"]["modelType"],
        json!("Operation")
    );

    let element: SubmodelElement = from_json_str(
        r#"{"modelType": "Property", "idShort": "speed", "valueType": "xs:double", "value": "12.5"}"#,
    )?;
    assert_eq!(
        element.as_property().and_then(|p| p.value.as_deref()),
        Some("12.5")
    );

    let unknown = from_json_str::<SubmodelElement>(r#"{"modelType": "Blob", "idShort": "b"}"#);
    assert!(matches!(unknown, Err(SerdeError::Json(_))));
    Ok(())
}

#[test]
fn test_embedded_data_specification_content() -> Result<()> {
    let value = to_json_value(&iec61360_spec())?;
    assert_eq!(
        value["dataSpecificationContent"]["modelType"],
        json!("DataSpecificationIec61360")
    );
    assert_eq!(value["dataSpecificationContent"]["dataType"], json!("REAL_MEASURE"));
    assert_eq!(
        value["dataSpecificationContent"]["levelType"],
        json!({ "min": true, "nom": false, "typ": true, "max": false })
    );

    let unit = to_json_value(&physical_unit_spec())?;
    assert_eq!(
        unit["dataSpecificationContent"]["modelType"],
        json!("DataSpecificationPhysicalUnit")
    );
    assert_eq!(unit["dataSpecificationContent"]["unitSymbol"], json!("m/s"));
    Ok(())
}

#[test]
fn test_mismatched_content_fails_write() {
    let mismatched = EmbeddedDataSpecification::new(
        Reference::external(PHYSICAL_UNIT_TEMPLATE),
        DataSpecificationIec61360::default(),
    );
    let err = to_json_string(&mismatched).err();
    assert!(matches!(err, Some(SerdeError::Json(_))), "{err:?}");
}

#[test]
fn test_content_is_read_as_the_referenced_shape() {
    let mislabelled = json!({
        "dataSpecification": {
            "type": "ExternalReference",
            "keys": [{ "type": "GlobalReference", "value": PHYSICAL_UNIT_TEMPLATE }]
        },
        "dataSpecificationContent": {
            "modelType": "DataSpecificationIec61360",
            "preferredName": [{ "language": "en", "text": "Speed" }]
        }
    });
    assert!(from_json_value::<EmbeddedDataSpecification>(mislabelled).is_err());

    let unknown = json!({
        "dataSpecification": {
            "type": "ExternalReference",
            "keys": [{ "type": "GlobalReference", "value": "urn:example:unknown-template" }]
        },
        "dataSpecificationContent": { "modelType": "DataSpecificationIec61360" }
    });
    let err = from_json_value::<EmbeddedDataSpecification>(unknown).err();
    assert!(
        err.is_some_and(|e| e.to_string().contains("urn:example:unknown-template")),
        "unresolvable reference should name the template"
    );
}

#[test]
fn test_specification_without_content() -> Result<()> {
    let eds = EmbeddedDataSpecification::builder()
        .data_specification(Reference::external("urn:example:unknown-template"))
        .build();
    let value = to_json_value(&eds)?;
    assert!(value.get("dataSpecificationContent").is_none());
    assert_eq!(from_json_value::<EmbeddedDataSpecification>(value)?, eds);
    Ok(())
}

#[test]
fn test_bad_tokens_are_rejected() {
    let bad_value_type = from_json_str::<Property>(r#"{"valueType": "xs:nope"}"#);
    assert!(matches!(bad_value_type, Err(SerdeError::Json(_))));

    let bad_key_type = from_json_str::<Key>(r#"{"type": "Nope", "value": "x"}"#);
    assert!(bad_key_type.is_err());

    assert!(from_json_str::<Operation>("not json").is_err());
}

#[cfg(feature = "xml")]
#[test]
fn test_json_and_xml_agree() -> Result<()> {
    use aas_serde::{from_xml_str, to_xml_string};

    let op = full_operation();
    let via_xml: Operation = from_xml_str(&to_xml_string(&op)?)?;
    let via_json: Operation = from_json_str(&to_json_string(&op)?)?;
    assert_eq!(via_xml, via_json);
    assert_eq!(to_json_value(&via_xml)?, to_json_value(&op)?);
    Ok(())
}
