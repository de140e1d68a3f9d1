//! Typed primitive descriptions decoded from query attributes.

use crate::error::EstimateError;
use crate::query::{PrimitiveClass, Query};
use primest_tables::TableId;

/// A floating-point operand format.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FpFormat {
    /// Exponent bits.
    pub exponent: f64,
    /// Mantissa bits.
    pub mantissa: f64,
}

impl FpFormat {
    /// Returns the total significant bit count.
    pub fn bits(self) -> f64 {
        self.mantissa + self.exponent
    }

    /// Returns whether the single-precision (32-bit) tables apply.
    pub fn is_single(self) -> bool {
        self.bits() <= 32.0
    }

    /// Returns the characterized width of the matching tables.
    pub fn reference_bits(self) -> f64 {
        if self.is_single() {
            32.0
        } else {
            64.0
        }
    }

    /// Returns the adder table for this format.
    pub fn adder_table(self) -> TableId {
        if self.is_single() {
            TableId::FpSpAdder
        } else {
            TableId::FpDpAdder
        }
    }

    /// Returns the multiplier table for this format.
    pub fn multiplier_table(self) -> TableId {
        if self.is_single() {
            TableId::FpSpMultiplier
        } else {
            TableId::FpDpMultiplier
        }
    }
}

/// A primitive with the attributes its estimators need.
///
/// Widths are real numbers: composite primitives derive sub-primitive
/// widths such as `log2(depth)` that need not be integral.
#[derive(Clone, PartialEq, Debug)]
pub enum Primitive {
    /// A `width`-bit register.
    Reg {
        /// Bits.
        width: f64,
    },
    /// A register file (also used for small SRAMs).
    RegFile {
        /// Bits per entry.
        width: f64,
        /// Entries.
        depth: f64,
    },
    /// A FIFO queue.
    Fifo {
        /// Bits per entry.
        width: f64,
        /// Entries.
        depth: f64,
    },
    /// A crossbar interconnect.
    Crossbar {
        /// Input ports.
        n_inputs: f64,
        /// Output ports.
        n_outputs: f64,
        /// Bits per port.
        width: f64,
    },
    /// A counter.
    Counter {
        /// Bits.
        width: f64,
    },
    /// A comparator.
    Comparator {
        /// Bits.
        width: f64,
    },
    /// A wire bundle.
    Wire {
        /// Bits.
        width: f64,
        /// The length as written, possibly with a unit suffix.
        length: String,
    },
    /// A bitwise logic unit.
    Bitwise {
        /// Bits.
        width: f64,
    },
    /// An integer adder.
    IntAdder {
        /// Bits.
        width: f64,
    },
    /// An integer multiplier.
    IntMultiplier {
        /// Bits.
        width: f64,
    },
    /// An integer multiply-accumulate unit.
    IntMac {
        /// Bits.
        width: f64,
    },
    /// A floating-point adder.
    FpAdder(FpFormat),
    /// A floating-point multiplier.
    FpMultiplier(FpFormat),
    /// A floating-point multiply-accumulate unit.
    FpMac(FpFormat),
}

impl Primitive {
    /// Decodes the attributes a class needs from a query.
    ///
    /// A wire's `width` and `length` are decoded only when `decode_wire` is
    /// set. Area queries and non-transfer wire actions cost nothing and
    /// leave both unread.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::MissingAttribute`] or
    /// [`EstimateError::InvalidAttribute`] for absent or unusable values.
    pub fn from_query(
        class: PrimitiveClass,
        query: &Query,
        decode_wire: bool,
    ) -> Result<Self, EstimateError> {
        let width = || query.number("width");
        let fp = || -> Result<FpFormat, EstimateError> {
            Ok(FpFormat {
                exponent: query.number("exponent")?,
                mantissa: query.number("mantissa")?,
            })
        };

        Ok(match class {
            PrimitiveClass::Reg => Primitive::Reg { width: width()? },
            PrimitiveClass::RegFile | PrimitiveClass::Sram => Primitive::RegFile {
                width: width()?,
                depth: query.number("depth")?,
            },
            PrimitiveClass::Fifo => Primitive::Fifo {
                width: width()?,
                depth: query.number("depth")?,
            },
            PrimitiveClass::Crossbar => Primitive::Crossbar {
                n_inputs: query.number("n_inputs")?,
                n_outputs: query.number("n_outputs")?,
                width: width()?,
            },
            PrimitiveClass::Counter => Primitive::Counter { width: width()? },
            PrimitiveClass::Comparator => Primitive::Comparator { width: width()? },
            PrimitiveClass::Wire => {
                let length = if decode_wire {
                    query
                        .attribute("length")
                        .ok_or(EstimateError::MissingAttribute {
                            class_name: query.class_name.clone(),
                            attribute: "length",
                        })?
                        .to_string()
                } else {
                    String::new()
                };
                Primitive::Wire {
                    width: if decode_wire { width()? } else { 0.0 },
                    length,
                }
            }
            PrimitiveClass::Bitwise => Primitive::Bitwise { width: width()? },
            PrimitiveClass::IntAdder => Primitive::IntAdder { width: width()? },
            PrimitiveClass::IntMultiplier => Primitive::IntMultiplier { width: width()? },
            PrimitiveClass::IntMac => Primitive::IntMac { width: width()? },
            PrimitiveClass::FpAdder => Primitive::FpAdder(fp()?),
            PrimitiveClass::FpMultiplier => Primitive::FpMultiplier(fp()?),
            PrimitiveClass::FpMac => Primitive::FpMac(fp()?),
        })
    }

    /// Returns the class name used in diagnostics.
    pub fn class_name(&self) -> &'static str {
        match self {
            Primitive::Reg { .. } => "reg",
            Primitive::RegFile { .. } => "regfile",
            Primitive::Fifo { .. } => "FIFO",
            Primitive::Crossbar { .. } => "crossbar",
            Primitive::Counter { .. } => "counter",
            Primitive::Comparator { .. } => "comparator",
            Primitive::Wire { .. } => "wire",
            Primitive::Bitwise { .. } => "bitwise",
            Primitive::IntAdder { .. } => "intadder",
            Primitive::IntMultiplier { .. } => "intmultiplier",
            Primitive::IntMac { .. } => "intmac",
            Primitive::FpAdder(_) => "fpadder",
            Primitive::FpMultiplier(_) => "fpmultiplier",
            Primitive::FpMac(_) => "fpmac",
        }
    }
}

/// Comparator width used by register files: `ceil(log2(depth))`.
pub(crate) fn regfile_comparator_width(depth: f64) -> f64 {
    depth.log2().ceil()
}

/// Comparator width used by FIFOs: `log2(depth)`, not rounded.
pub(crate) fn fifo_comparator_width(depth: f64) -> f64 {
    depth.log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sram_decodes_as_regfile() {
        let q = Query::new("SRAM")
            .with_attribute("width", 16)
            .with_attribute("depth", 64);
        let p = Primitive::from_query(PrimitiveClass::Sram, &q, true).unwrap();
        assert_eq!(
            p,
            Primitive::RegFile {
                width: 16.0,
                depth: 64.0
            }
        );
    }

    #[test]
    fn fp_format_selects_tables() {
        let half = FpFormat {
            exponent: 5.0,
            mantissa: 10.0,
        };
        assert_eq!(half.bits(), 15.0);
        assert_eq!(half.reference_bits(), 32.0);
        assert_eq!(half.adder_table(), TableId::FpSpAdder);

        let single = FpFormat {
            exponent: 8.0,
            mantissa: 24.0,
        };
        assert!(single.is_single());
        assert_eq!(single.multiplier_table(), TableId::FpSpMultiplier);

        let double = FpFormat {
            exponent: 11.0,
            mantissa: 53.0,
        };
        assert_eq!(double.reference_bits(), 64.0);
        assert_eq!(double.adder_table(), TableId::FpDpAdder);
        assert_eq!(double.multiplier_table(), TableId::FpDpMultiplier);
    }

    #[test]
    fn wire_length_kept_as_text() {
        let q = Query::new("wire")
            .with_attribute("width", 8)
            .with_attribute("length", 100);
        match Primitive::from_query(PrimitiveClass::Wire, &q, true).unwrap() {
            Primitive::Wire { width, length } => {
                assert_eq!(width, 8.0);
                assert_eq!(length, "100");
            }
            other => panic!("expected wire, got {other:?}"),
        }
    }

    #[test]
    fn undecoded_wire_needs_no_attributes() {
        let q = Query::new("wire");
        assert!(Primitive::from_query(PrimitiveClass::Wire, &q, false).is_ok());
        assert!(Primitive::from_query(PrimitiveClass::Wire, &q, true).is_err());
    }

    #[test]
    fn missing_depth() {
        let q = Query::new("FIFO").with_attribute("width", 8);
        let err = Primitive::from_query(PrimitiveClass::Fifo, &q, true).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::MissingAttribute {
                attribute: "depth",
                ..
            }
        ));
    }

    #[test]
    fn comparator_widths() {
        assert_eq!(regfile_comparator_width(64.0), 6.0);
        assert_eq!(regfile_comparator_width(100.0), 7.0);
        assert_eq!(fifo_comparator_width(64.0), 6.0);
        assert!((fifo_comparator_width(100.0) - 6.643856189774724).abs() < 1e-12);
    }
}
