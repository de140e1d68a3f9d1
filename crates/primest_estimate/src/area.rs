//! Area estimators.
//!
//! Area uses the same scaling rules as energy but reads the area column and
//! ignores actions. The lookup bucket depends only on the clock period.

use crate::error::EstimateError;
use crate::interpolate::Interpolation;
use crate::primitive::{fifo_comparator_width, regfile_comparator_width, Primitive};
use crate::query::{PrimitiveClass, Query};
use primest_tables::{bucket_latency, Metric, TableId, TableStore};

const INT_REFERENCE_BITS: f64 = 32.0;

/// A decoded area request.
#[derive(Clone, PartialEq, Debug)]
pub struct AreaRequest {
    /// The primitive being estimated.
    pub primitive: Primitive,
    /// Clock period in seconds.
    pub cycle_seconds: f64,
}

impl AreaRequest {
    /// Decodes a query. Actions and arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::UnsupportedPrimitive`] for an unknown class
    /// and attribute errors for missing or invalid attributes.
    pub fn from_query(query: &Query, default_cycle_seconds: f64) -> Result<Self, EstimateError> {
        let class: PrimitiveClass = query.class_name.parse()?;
        Ok(Self {
            primitive: Primitive::from_query(class, query, false)?,
            cycle_seconds: query.number_or("global_cycle_seconds", default_cycle_seconds)?,
        })
    }
}

/// Computes areas in um² from a table store.
#[derive(Clone, Copy, Debug)]
pub struct AreaModel<'a> {
    tables: &'a TableStore,
    default_cycle_seconds: f64,
}

impl<'a> AreaModel<'a> {
    /// Creates a model reading from `tables`.
    ///
    /// `default_cycle_seconds` is the period used for the comparator part
    /// of register files and FIFOs, which does not inherit the parent's
    /// clock.
    pub fn new(tables: &'a TableStore, default_cycle_seconds: f64) -> Self {
        Self {
            tables,
            default_cycle_seconds,
        }
    }

    /// Returns the area of a primitive, in um².
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Table`] if a table lacks the area column.
    pub fn estimate(&self, request: &AreaRequest) -> Result<f64, EstimateError> {
        let cycle = request.cycle_seconds;
        match &request.primitive {
            Primitive::Reg { width } => Ok(self.table_area(TableId::Reg, cycle)? * width),
            Primitive::RegFile { depth, .. } => {
                if *depth == 0.0 {
                    return Ok(0.0);
                }
                let reg = self.table_area(TableId::Reg, cycle)?;
                let comparator = self.comparator(regfile_comparator_width(*depth))?;
                Ok(reg + comparator * depth)
            }
            Primitive::Fifo { width, depth } => {
                if *depth == 0.0 {
                    return Ok(0.0);
                }
                let reg = self.table_area(TableId::Reg, cycle)?;
                Ok(reg * width + self.comparator(fifo_comparator_width(*depth))?)
            }
            Primitive::Crossbar {
                n_inputs,
                n_outputs,
                width,
            } => Ok(self.table_area(TableId::Crossbar, cycle)?
                * n_inputs
                * (n_outputs / 4.0)
                * (width / 32.0)),
            Primitive::Counter { width } => {
                Ok(self.table_area(TableId::Counter, cycle)? * (width / 32.0))
            }
            Primitive::Comparator { width } => {
                Ok(self.table_area(TableId::Comparator, cycle)? * (width / 32.0))
            }
            Primitive::Wire { .. } => Ok(0.0),
            Primitive::Bitwise { width } => Ok(self.table_area(TableId::Bitwise, cycle)? * width),
            Primitive::IntAdder { width } => {
                self.scaled(TableId::Adder, cycle, *width, INT_REFERENCE_BITS, Interpolation::Linear)
            }
            Primitive::FpAdder(fmt) => self.scaled(
                fmt.adder_table(),
                cycle,
                fmt.bits(),
                fmt.reference_bits(),
                Interpolation::Linear,
            ),
            Primitive::IntMultiplier { width } => self.scaled(
                TableId::Multiplier,
                cycle,
                *width,
                INT_REFERENCE_BITS,
                Interpolation::Quadratic,
            ),
            Primitive::FpMultiplier(fmt) => self.scaled(
                fmt.multiplier_table(),
                cycle,
                fmt.bits(),
                fmt.reference_bits(),
                Interpolation::Quadratic,
            ),
            Primitive::IntMac { width } => Ok(self.scaled(
                TableId::Adder,
                cycle,
                *width,
                INT_REFERENCE_BITS,
                Interpolation::Linear,
            )? + self.scaled(
                TableId::Multiplier,
                cycle,
                *width,
                INT_REFERENCE_BITS,
                Interpolation::Quadratic,
            )?),
            Primitive::FpMac(fmt) => Ok(self.scaled(
                fmt.adder_table(),
                cycle,
                fmt.bits(),
                fmt.reference_bits(),
                Interpolation::Linear,
            )? + self.scaled(
                fmt.multiplier_table(),
                cycle,
                fmt.bits(),
                fmt.reference_bits(),
                Interpolation::Quadratic,
            )?),
        }
    }

    /// Looks up a table's area at the bucket of one `cycle_seconds` cycle.
    pub fn table_area(&self, id: TableId, cycle_seconds: f64) -> Result<f64, EstimateError> {
        let hit = self
            .tables
            .lookup(id, bucket_latency(cycle_seconds, 1.0), Metric::Area)?;
        Ok(hit.value)
    }

    fn comparator(&self, width: f64) -> Result<f64, EstimateError> {
        self.estimate(&AreaRequest {
            primitive: Primitive::Comparator { width },
            cycle_seconds: self.default_cycle_seconds,
        })
    }

    fn scaled(
        &self,
        id: TableId,
        cycle_seconds: f64,
        bits: f64,
        reference_bits: f64,
        interpolation: Interpolation,
    ) -> Result<f64, EstimateError> {
        let area = self.table_area(id, cycle_seconds)?;
        Ok(interpolation.apply(bits, reference_bits, area))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::FpFormat;

    fn model() -> AreaModel<'static> {
        AreaModel::new(TableStore::embedded().unwrap(), 5e-9)
    }

    fn area(id: TableId, key: &str) -> f64 {
        TableStore::embedded()
            .unwrap()
            .table(id)
            .find(key)
            .unwrap()
            .area
            .unwrap()
    }

    fn at(primitive: Primitive, cycle_seconds: f64) -> AreaRequest {
        AreaRequest {
            primitive,
            cycle_seconds,
        }
    }

    #[test]
    fn request_ignores_action() {
        let q = Query::new("wire")
            .with_attribute("technology", 45)
            .with_action("transfer");
        let req = AreaRequest::from_query(&q, 5e-9).unwrap();
        assert_eq!(req.cycle_seconds, 5e-9);
        assert_eq!(model().estimate(&req).unwrap(), 0.0);
    }

    #[test]
    fn reg_scales_with_width() {
        let got = model().estimate(&at(Primitive::Reg { width: 8.0 }, 2e-9)).unwrap();
        assert_eq!(got, area(TableId::Reg, "2") * 8.0);
    }

    #[test]
    fn regfile_comparator_uses_default_cycle() {
        let req = at(
            Primitive::RegFile {
                width: 16.0,
                depth: 64.0,
            },
            1e-9,
        );
        let expected =
            area(TableId::Reg, "1") + area(TableId::Comparator, "5") * (6.0 / 32.0) * 64.0;
        assert_eq!(model().estimate(&req).unwrap(), expected);
    }

    #[test]
    fn fifo_area() {
        let req = at(
            Primitive::Fifo {
                width: 8.0,
                depth: 16.0,
            },
            5e-9,
        );
        let expected = area(TableId::Reg, "5") * 8.0 + area(TableId::Comparator, "5") * (4.0 / 32.0);
        assert_eq!(model().estimate(&req).unwrap(), expected);
    }

    #[test]
    fn zero_depth_is_zero() {
        let m = model();
        for primitive in [
            Primitive::RegFile {
                width: 8.0,
                depth: 0.0,
            },
            Primitive::Fifo {
                width: 8.0,
                depth: 0.0,
            },
        ] {
            assert_eq!(m.estimate(&at(primitive, 5e-9)).unwrap(), 0.0);
        }
    }

    #[test]
    fn reference_width_is_table_value() {
        let m = model();
        assert_eq!(
            m.estimate(&at(Primitive::IntAdder { width: 32.0 }, 5e-9)).unwrap(),
            area(TableId::Adder, "5")
        );
        let single = FpFormat {
            exponent: 8.0,
            mantissa: 24.0,
        };
        assert_eq!(
            m.estimate(&at(Primitive::FpMultiplier(single), 5e-9)).unwrap(),
            area(TableId::FpSpMultiplier, "5")
        );
    }

    #[test]
    fn mac_is_adder_plus_multiplier() {
        let m = model();
        let adder = m.estimate(&at(Primitive::IntAdder { width: 16.0 }, 5e-9)).unwrap();
        let mult = m
            .estimate(&at(Primitive::IntMultiplier { width: 16.0 }, 5e-9))
            .unwrap();
        let mac = m.estimate(&at(Primitive::IntMac { width: 16.0 }, 5e-9)).unwrap();
        assert_eq!(mac, adder + mult);
    }
}
