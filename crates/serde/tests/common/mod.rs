#![allow(dead_code)]

use aas_model::*;

pub const IEC61360_TEMPLATE: &str =
    "https://admin-shell.io/DataSpecificationTemplates/DataSpecificationIec61360/3/0";
pub const PHYSICAL_UNIT_TEMPLATE: &str =
    "https://admin-shell.io/DataSpecificationTemplates/DataSpecificationPhysicalUnit/3/0";

/// The `calc` operation: one input variable, nothing else.
pub fn calc_operation() -> Operation {
    Operation::builder()
        .id_short("calc")
        .input_variable(OperationVariable::new(
            Property::builder().id_short("x").build(),
        ))
        .build()
}

pub fn iec61360_spec() -> EmbeddedDataSpecification {
    let content = DataSpecificationIec61360::builder()
        .add_preferred_name(LangStringPreferredNameTypeIec61360::new("en", "Rotation speed"))
        .add_preferred_name(LangStringPreferredNameTypeIec61360::new("de", "Drehzahl"))
        .add_short_name(LangStringShortNameTypeIec61360::new("en", "n"))
        .unit("1/min")
        .unit_id(Reference::external("urn:example:unit:rpm"))
        .source_of_definition("IEC 61360")
        .symbol("n")
        .data_type(DataTypeIec61360::RealMeasure)
        .add_definition(LangStringDefinitionTypeIec61360::new(
            "en",
            "Number of revolutions per minute",
        ))
        .value_format("xs:double")
        .value_list(
            ValueList::builder()
                .value_reference_pair(ValueReferencePair::new("low"))
                .value_reference_pair(
                    ValueReferencePair::builder()
                        .value("high")
                        .value_id(Reference::external("urn:example:high"))
                        .build(),
                )
                .build(),
        )
        .value("1500")
        .level_type(LevelType {
            min: true,
            nom: false,
            typ: true,
            max: false,
        })
        .build();
    EmbeddedDataSpecification::new(Reference::external(IEC61360_TEMPLATE), content)
}

pub fn physical_unit_spec() -> EmbeddedDataSpecification {
    let content = DataSpecificationPhysicalUnit::builder()
        .unit_name("metre per second")
        .unit_symbol("m/s")
        .add_definition(LangStringDefinitionTypeIec61360::new("en", "SI unit of speed"))
        .si_notation("m·s⁻¹")
        .si_name("metre per second")
        .din_notation("m/s")
        .ece_name("metre per second")
        .ece_code("MTS")
        .nist_name("meter per second")
        .source_of_definition("SI Brochure")
        .conversion_factor("1")
        .registration_authority_id("BIPM")
        .supplier("example")
        .build();
    EmbeddedDataSpecification::new(Reference::external(PHYSICAL_UNIT_TEMPLATE), content)
}

/// An operation with every field and nested value type populated.
pub fn full_operation() -> Operation {
    let speed = Property::builder()
        .extension(
            Extension::builder()
                .name("vendor:precision")
                .value_type(DataTypeDefXsd::Int)
                .value("3")
                .add_refers_to(Reference::model([(KeyTypes::Submodel, "urn:example:sm")]))
                .build(),
        )
        .category("VARIABLE")
        .id_short("speed")
        .display_name(LangStringNameType::new("en", "Speed"))
        .description(LangStringTextType::new("en", "Current speed & direction <forward>"))
        .semantic_id(Reference::external("urn:example:speed"))
        .supplemental_semantic_id(Reference::external("urn:example:velocity"))
        .qualifier(
            Qualifier::builder()
                .kind(QualifierKind::ValueQualifier)
                .qualifier_type("Multiplicity")
                .value_type(DataTypeDefXsd::String)
                .value("One")
                .build(),
        )
        .embedded_data_specification(iec61360_spec())
        .value_type(DataTypeDefXsd::Double)
        .value("12.5")
        .value_id(Reference::external("urn:example:value"))
        .build();

    let nested = Operation::builder()
        .id_short("reset")
        .embedded_data_specification(physical_unit_spec())
        .build();

    Operation::builder()
        .extension(Extension::new("vendor:flag"))
        .category("FUNCTION")
        .id_short("calc")
        .display_name(LangStringNameType::new("en", "Calculate"))
        .display_name(LangStringNameType::new("de", "Berechnen"))
        .description(LangStringTextType::new("en", "Computes the speed"))
        .semantic_id(
            Reference::builder()
                .reference_type(ReferenceTypes::ModelReference)
                .referred_semantic_id(Reference::external("urn:example:referred"))
                .key(Key::new(KeyTypes::ConceptDescription, "urn:example:cd:calc"))
                .build(),
        )
        .supplemental_semantic_id(Reference::external("urn:example:supplemental"))
        .qualifier(
            Qualifier::builder()
                .semantic_id(Reference::external("urn:example:q"))
                .qualifier_type("ExpressionSemantic")
                .value_type(DataTypeDefXsd::Boolean)
                .value("true")
                .value_id(Reference::external("urn:example:true"))
                .build(),
        )
        .embedded_data_specification(iec61360_spec())
        .embedded_data_specification(physical_unit_spec())
        .input_variable(OperationVariable::new(speed))
        .output_variable(OperationVariable::new(
            Property::builder()
                .id_short("result")
                .value_type(DataTypeDefXsd::Double)
                .value("")
                .build(),
        ))
        .inoutput_variable(OperationVariable::new(nested))
        .build()
}
