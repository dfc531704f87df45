use rand::RngCore;

use synthtab_core::ColumnType;

use crate::errors::GenerationError;
use crate::faker_rs::{FakeRsAdapter, FakerKind};
use crate::generators::{ColumnGenerator, GeneratedValue, GeneratorContext, mismatch};

/// Column generator delegating every row to the synthesis provider.
#[derive(Debug, Clone, Copy)]
pub struct FakerGenerator {
    column_type: ColumnType,
    kind: FakerKind,
}

impl FakerGenerator {
    pub fn new(column_type: ColumnType, kind: FakerKind) -> Self {
        Self { column_type, kind }
    }

    pub fn kind(&self) -> FakerKind {
        self.kind
    }
}

impl ColumnGenerator for FakerGenerator {
    fn column_type(&self) -> ColumnType {
        self.column_type
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<GeneratedValue>, GenerationError> {
        if ctx.column.column_type() != self.column_type {
            return Err(mismatch(self.column_type, ctx.column));
        }
        Ok((0..ctx.rows)
            .map(|_| {
                GeneratedValue::Text(FakeRsAdapter::generate_text(self.kind, ctx.locale, rng))
            })
            .collect())
    }
}
