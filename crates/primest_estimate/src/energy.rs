//! Energy-per-action estimators.
//!
//! Every primitive's energy starts from a single table lookup at the query's
//! latency bucket and is then scaled by the primitive's attributes.
//! Composite primitives (register files, FIFOs, multiply-accumulate units)
//! are estimated by building derived requests for their parts and summing
//! the results. Derived requests are new values; the caller's request is
//! never modified.

use crate::error::EstimateError;
use crate::interpolate::Interpolation;
use crate::primitive::{fifo_comparator_width, regfile_comparator_width, Primitive};
use crate::query::{Action, PrimitiveClass, Query};
use primest_common::{LengthUnit, WireLength};
use primest_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use primest_tables::{bucket_latency, LatencyBucket, Metric, TableId, TableStore};

/// Width every integer arithmetic table was characterized at.
const INT_REFERENCE_BITS: f64 = 32.0;

/// Dynamic energy of a reused-operand multiply relative to a random one.
const MULT_REUSED_FACTOR: f64 = 0.85;

const WIRE_ACTIVITY: f64 = 0.2;
const WIRE_CAPACITANCE_F_PER_UM: f64 = 1.627e-15;
const WIRE_VDD: f64 = 1.0;

/// The clock a request is evaluated at.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Clock {
    /// Clock period in seconds.
    pub cycle_seconds: f64,
    /// Number of cycles the action takes.
    pub action_cycles: f64,
}

impl Clock {
    /// Reads `global_cycle_seconds` and `action_latency_cycles` from a
    /// query, defaulting to `default_cycle_seconds` and one cycle.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidAttribute`] for non-numeric or
    /// negative values.
    pub fn from_query(query: &Query, default_cycle_seconds: f64) -> Result<Self, EstimateError> {
        Ok(Self {
            cycle_seconds: query.number_or("global_cycle_seconds", default_cycle_seconds)?,
            action_cycles: query.argument_or("action_latency_cycles", 1.0)?,
        })
    }

    /// Returns the latency bucket of one action.
    pub fn bucket(&self) -> LatencyBucket {
        bucket_latency(self.cycle_seconds, self.action_cycles)
    }
}

/// Whether a register-file access changes its data or its address.
///
/// Both default to 1 (changed); a zero delta means the corresponding part
/// of the access costs nothing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AccessDeltas {
    /// `data_delta` argument.
    pub data: f64,
    /// `address_delta` argument.
    pub address: f64,
}

impl Default for AccessDeltas {
    fn default() -> Self {
        Self {
            data: 1.0,
            address: 1.0,
        }
    }
}

/// A fully decoded energy request.
#[derive(Clone, PartialEq, Debug)]
pub struct EnergyRequest {
    /// The primitive being estimated.
    pub primitive: Primitive,
    /// The action performed.
    pub action: Action,
    /// The clock the action runs at.
    pub clock: Clock,
    /// Access deltas, used by register files.
    pub deltas: AccessDeltas,
}

impl EnergyRequest {
    /// Decodes a query.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::UnsupportedPrimitive`] for an unknown class,
    /// [`EstimateError::MissingAction`] if the query has no action, and
    /// attribute errors for missing or invalid attributes.
    pub fn from_query(query: &Query, default_cycle_seconds: f64) -> Result<Self, EstimateError> {
        let class: PrimitiveClass = query.class_name.parse()?;
        let action = query
            .action_name
            .as_deref()
            .map(Action::parse)
            .ok_or_else(|| EstimateError::MissingAction(query.class_name.clone()))?;
        // Only a transfer reads a wire's dimensions.
        let decode_wire = action.is_transfer();
        Ok(Self {
            primitive: Primitive::from_query(class, query, decode_wire)?,
            action,
            clock: Clock::from_query(query, default_cycle_seconds)?,
            deltas: AccessDeltas {
                data: query.signed_argument_or("data_delta", 1.0)?,
                address: query.signed_argument_or("address_delta", 1.0)?,
            },
        })
    }

    /// Returns a copy of this request performing a different action.
    pub fn with_action(&self, action: Action) -> Self {
        Self {
            action,
            ..self.clone()
        }
    }

    /// Returns a copy of this request for a different primitive, keeping
    /// the clock and arguments.
    pub fn with_primitive(&self, primitive: Primitive) -> Self {
        Self {
            primitive,
            ..self.clone()
        }
    }
}

/// Computes energies in pJ from a table store.
#[derive(Clone, Copy, Debug)]
pub struct EnergyModel<'a> {
    tables: &'a TableStore,
}

impl<'a> EnergyModel<'a> {
    /// Creates a model reading from `tables`.
    pub fn new(tables: &'a TableStore) -> Self {
        Self { tables }
    }

    /// Returns the energy of one action, in pJ.
    ///
    /// Wire lengths without a recognizable unit are reported to `sink` as
    /// warnings; nothing else is reported.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::InvalidLength`] for an unparseable wire
    /// length and [`EstimateError::Table`] if a table lacks a column.
    pub fn estimate(
        &self,
        request: &EnergyRequest,
        sink: &DiagnosticSink,
    ) -> Result<f64, EstimateError> {
        match &request.primitive {
            Primitive::Reg { width } => Ok(self.table_energy(TableId::Reg, request)? * width),
            Primitive::RegFile { depth, .. } => self.regfile(request, *depth, sink),
            Primitive::Fifo { width, depth } => self.fifo(request, *width, *depth, sink),
            Primitive::Crossbar {
                n_inputs,
                n_outputs,
                width,
            } => Ok(self.table_energy(TableId::Crossbar, request)?
                * n_inputs
                * (n_outputs / 4.0)
                * (width / 32.0)),
            Primitive::Counter { width } => {
                Ok(self.table_energy(TableId::Counter, request)? * (width / 32.0))
            }
            Primitive::Comparator { width } => {
                Ok(self.table_energy(TableId::Comparator, request)? * (width / 32.0))
            }
            Primitive::Wire { width, length } => self.wire(request, *width, length, sink),
            Primitive::Bitwise { width } => {
                Ok(self.table_energy(TableId::Bitwise, request)? * width)
            }
            Primitive::IntAdder { width } => {
                self.adder(request, TableId::Adder, *width, INT_REFERENCE_BITS)
            }
            Primitive::FpAdder(fmt) => {
                self.adder(request, fmt.adder_table(), fmt.bits(), fmt.reference_bits())
            }
            Primitive::IntMultiplier { width } => {
                self.multiplier(request, TableId::Multiplier, *width, INT_REFERENCE_BITS)
            }
            Primitive::FpMultiplier(fmt) => self.multiplier(
                request,
                fmt.multiplier_table(),
                fmt.bits(),
                fmt.reference_bits(),
            ),
            Primitive::IntMac { width } => {
                let mult = request.with_action(request.action.mac_to_mult());
                Ok(self.adder(request, TableId::Adder, *width, INT_REFERENCE_BITS)?
                    + self.multiplier(&mult, TableId::Multiplier, *width, INT_REFERENCE_BITS)?)
            }
            Primitive::FpMac(fmt) => {
                let mult = request.with_action(request.action.mac_to_mult());
                Ok(
                    self.adder(request, fmt.adder_table(), fmt.bits(), fmt.reference_bits())?
                        + self.multiplier(
                            &mult,
                            fmt.multiplier_table(),
                            fmt.bits(),
                            fmt.reference_bits(),
                        )?,
                )
            }
        }
    }

    /// Looks up the per-action energy of a table at the request's bucket.
    ///
    /// `leak` reads idle energy and is rescaled from the latency the row
    /// was characterized at to one clock cycle; every other action reads
    /// dynamic energy as is.
    pub fn table_energy(&self, id: TableId, request: &EnergyRequest) -> Result<f64, EstimateError> {
        let leak = request.action.is_leak();
        let metric = if leak {
            Metric::IdleEnergy
        } else {
            Metric::DynamicEnergy
        };
        let hit = self.tables.lookup(id, request.clock.bucket(), metric)?;
        if leak {
            Ok(hit.value * (request.clock.cycle_seconds / hit.latency_seconds))
        } else {
            Ok(hit.value)
        }
    }

    fn regfile(
        &self,
        request: &EnergyRequest,
        depth: f64,
        sink: &DiagnosticSink,
    ) -> Result<f64, EstimateError> {
        if depth == 0.0 {
            return Ok(0.0);
        }
        let comparator = request.with_primitive(Primitive::Comparator {
            width: regfile_comparator_width(depth),
        });

        // The register term is one entry's worth and is not scaled by width.
        let (reg, compare) = if request.action.is_leak() {
            (
                self.table_energy(TableId::Reg, request)?,
                self.estimate(&comparator, sink)?,
            )
        } else {
            let reg = if request.deltas.data == 0.0 {
                0.0
            } else {
                self.table_energy(TableId::Reg, request)?
            };
            let compare = if request.deltas.address != 0.0 {
                self.estimate(&comparator, sink)?
            } else {
                0.0
            };
            (reg, compare)
        };
        Ok(reg + compare * depth)
    }

    fn fifo(
        &self,
        request: &EnergyRequest,
        width: f64,
        depth: f64,
        sink: &DiagnosticSink,
    ) -> Result<f64, EstimateError> {
        if depth == 0.0 {
            return Ok(0.0);
        }
        let reg = self.table_energy(TableId::Reg, request)?;
        let action = if request.action.is_leak() {
            Action::Leak
        } else {
            Action::Access
        };
        let comparator = request
            .with_primitive(Primitive::Comparator {
                width: fifo_comparator_width(depth),
            })
            .with_action(action);
        Ok(reg * width + self.estimate(&comparator, sink)?)
    }

    fn wire(
        &self,
        request: &EnergyRequest,
        width: f64,
        length: &str,
        sink: &DiagnosticSink,
    ) -> Result<f64, EstimateError> {
        if !request.action.is_transfer() {
            return Ok(0.0);
        }
        let parsed = WireLength::parse(length).map_err(|source| EstimateError::InvalidLength {
            class_name: request.primitive.class_name().to_string(),
            source,
        })?;
        match parsed.unit() {
            LengthUnit::Unspecified => sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::WIRE_LENGTH_NO_UNIT,
                    format!("wire length '{length}' has no unit, assuming micrometres"),
                )
                .with_class("wire"),
            ),
            LengthUnit::Unrecognized => sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::WIRE_LENGTH_BAD_UNIT,
                    format!("unrecognized unit in wire length '{length}', estimating zero energy"),
                )
                .with_class("wire")
                .with_help("use a mm, um or nm suffix"),
            ),
            _ => {}
        }
        let joules = width
            * WIRE_ACTIVITY
            * WIRE_CAPACITANCE_F_PER_UM
            * parsed.um()
            * WIRE_VDD
            * WIRE_VDD;
        Ok(joules * 1e12)
    }

    fn adder(
        &self,
        request: &EnergyRequest,
        id: TableId,
        bits: f64,
        reference_bits: f64,
    ) -> Result<f64, EstimateError> {
        let energy = self.table_energy(id, request)?;
        Ok(Interpolation::Linear.apply(bits, reference_bits, energy))
    }

    fn multiplier(
        &self,
        request: &EnergyRequest,
        id: TableId,
        bits: f64,
        reference_bits: f64,
    ) -> Result<f64, EstimateError> {
        // A gated multiply only leaks.
        let energy = if request.action == Action::MultGated {
            self.table_energy(id, &request.with_action(Action::Leak))?
        } else {
            self.table_energy(id, request)?
        };
        let energy = Interpolation::Quadratic.apply(bits, reference_bits, energy);
        if request.action == Action::MultReused {
            Ok(energy * MULT_REUSED_FACTOR)
        } else {
            Ok(energy)
        }
    }
}
