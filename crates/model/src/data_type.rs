//! Value type enumerations.

use crate::AasEnum;

/// XML Schema built-in types a value may be declared as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AasEnum)]
pub enum DataTypeDefXsd {
    #[aas(rename = "xs:anyURI")]
    AnyUri,
    #[aas(rename = "xs:base64Binary")]
    Base64Binary,
    #[aas(rename = "xs:boolean")]
    Boolean,
    #[aas(rename = "xs:byte")]
    Byte,
    #[aas(rename = "xs:date")]
    Date,
    #[aas(rename = "xs:dateTime")]
    DateTime,
    #[aas(rename = "xs:decimal")]
    Decimal,
    #[aas(rename = "xs:double")]
    Double,
    #[aas(rename = "xs:duration")]
    Duration,
    #[aas(rename = "xs:float")]
    Float,
    #[aas(rename = "xs:gDay")]
    GDay,
    #[aas(rename = "xs:gMonth")]
    GMonth,
    #[aas(rename = "xs:gMonthDay")]
    GMonthDay,
    #[aas(rename = "xs:gYear")]
    GYear,
    #[aas(rename = "xs:gYearMonth")]
    GYearMonth,
    #[aas(rename = "xs:hexBinary")]
    HexBinary,
    #[aas(rename = "xs:int")]
    Int,
    #[aas(rename = "xs:integer")]
    Integer,
    #[aas(rename = "xs:long")]
    Long,
    #[aas(rename = "xs:negativeInteger")]
    NegativeInteger,
    #[aas(rename = "xs:nonNegativeInteger")]
    NonNegativeInteger,
    #[aas(rename = "xs:nonPositiveInteger")]
    NonPositiveInteger,
    #[aas(rename = "xs:positiveInteger")]
    PositiveInteger,
    #[aas(rename = "xs:short")]
    Short,
    #[default]
    #[aas(rename = "xs:string")]
    String,
    #[aas(rename = "xs:time")]
    Time,
    #[aas(rename = "xs:unsignedByte")]
    UnsignedByte,
    #[aas(rename = "xs:unsignedInt")]
    UnsignedInt,
    #[aas(rename = "xs:unsignedLong")]
    UnsignedLong,
    #[aas(rename = "xs:unsignedShort")]
    UnsignedShort,
}

/// Data types of IEC 61360 concept descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AasEnum)]
pub enum DataTypeIec61360 {
    #[aas(rename = "DATE")]
    Date,
    #[default]
    #[aas(rename = "STRING")]
    String,
    #[aas(rename = "STRING_TRANSLATABLE")]
    StringTranslatable,
    #[aas(rename = "INTEGER_MEASURE")]
    IntegerMeasure,
    #[aas(rename = "INTEGER_COUNT")]
    IntegerCount,
    #[aas(rename = "INTEGER_CURRENCY")]
    IntegerCurrency,
    #[aas(rename = "REAL_MEASURE")]
    RealMeasure,
    #[aas(rename = "REAL_COUNT")]
    RealCount,
    #[aas(rename = "REAL_CURRENCY")]
    RealCurrency,
    #[aas(rename = "BOOLEAN")]
    Boolean,
    #[aas(rename = "IRI")]
    Iri,
    #[aas(rename = "IRDI")]
    Irdi,
    #[aas(rename = "RATIONAL")]
    Rational,
    #[aas(rename = "RATIONAL_MEASURE")]
    RationalMeasure,
    #[aas(rename = "TIME")]
    Time,
    #[aas(rename = "TIMESTAMP")]
    Timestamp,
    #[aas(rename = "FILE")]
    File,
    #[aas(rename = "HTML")]
    Html,
    #[aas(rename = "BLOB")]
    Blob,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tokens() {
        assert_eq!(DataTypeDefXsd::default().as_str(), "xs:string");
        assert_eq!(DataTypeDefXsd::from_wire("xs:dateTime"), Some(DataTypeDefXsd::DateTime));
        assert_eq!(DataTypeDefXsd::from_wire("dateTime"), None);
        assert_eq!(
            "STRING_TRANSLATABLE".parse::<DataTypeIec61360>(),
            Ok(DataTypeIec61360::StringTranslatable)
        );
        assert_eq!(DataTypeIec61360::RealMeasure.to_string(), "REAL_MEASURE");
    }

    #[test]
    fn test_unknown_token() {
        let err = "xs:nope".parse::<DataTypeDefXsd>().unwrap_err();
        assert_eq!(err.kind(), "DataTypeDefXsd");
        assert_eq!(err.token(), "xs:nope");
    }

    #[test]
    fn test_all_tokens_are_distinct() {
        for (i, a) in DataTypeDefXsd::ALL.iter().enumerate() {
            for b in &DataTypeDefXsd::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
            assert_eq!(DataTypeDefXsd::from_wire(a.as_str()), Some(*a));
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&DataTypeDefXsd::Int).unwrap();
        assert_eq!(json, "\"xs:int\"");
        let back: DataTypeDefXsd = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DataTypeDefXsd::Int);
        assert!(serde_json::from_str::<DataTypeDefXsd>("\"xs:bogus\"").is_err());
    }
}
