//! The sample preference set and its field-level operations.

use anyhow::{Context, bail};
use prefkit::{PrefValue, TypedEditor, preferences};

use crate::cli::{Field, SetAll};

#[cfg(test)]
mod tests;

preferences! {
	/// Preferences kept by the sample app.
	pub struct SamplePrefs {
		name: String = "name",
		flag: bool = "flag",
		count: i32 = "count",
		total: i64 = "total",
		ratio: f32 = "ratio",
		precise: f64 = "precise",
	}
}

/// Renders the stored value of `field`, or `<unset>`.
pub fn read(prefs: &SamplePrefs, field: Field) -> anyhow::Result<String> {
	fn render<T: PrefValue + ToString + Default>(editor: &TypedEditor<T>) -> String {
		if editor.contains() {
			editor.get(T::default()).to_string()
		} else {
			"<unset>".to_string()
		}
	}

	Ok(match field {
		Field::Name => render(&*prefs.name()?),
		Field::Flag => render(&*prefs.flag()?),
		Field::Count => render(&*prefs.count()?),
		Field::Total => render(&*prefs.total()?),
		Field::Ratio => render(&*prefs.ratio()?),
		Field::Precise => render(&*prefs.precise()?),
	})
}

/// Parses `raw` per the type of `field` and stages it.
pub fn stage(prefs: &SamplePrefs, field: Field, raw: &str) -> anyhow::Result<()> {
	let invalid = || format!("invalid value '{raw}' for {}", field.key());
	match field {
		Field::Name => {
			prefs.name()?.set(raw.to_string());
		}
		Field::Flag => {
			prefs.flag()?.set(raw.parse::<bool>().with_context(invalid)?);
		}
		Field::Count => {
			prefs.count()?.set(raw.parse::<i32>().with_context(invalid)?);
		}
		Field::Total => {
			prefs.total()?.set(raw.parse::<i64>().with_context(invalid)?);
		}
		Field::Ratio => {
			let value = raw.parse::<f32>().with_context(invalid)?;
			prefs.ratio()?.set(finite(field, value)?);
		}
		Field::Precise => {
			let value = raw.parse::<f64>().with_context(invalid)?;
			prefs.precise()?.set(finite(field, value)?);
		}
	}
	Ok(())
}

/// Stages every field present in `values`.
pub fn stage_all(prefs: &SamplePrefs, values: SetAll) -> anyhow::Result<()> {
	if let Some(name) = values.name {
		prefs.name()?.set(name);
	}
	if let Some(flag) = values.flag {
		prefs.flag()?.set(flag);
	}
	if let Some(count) = values.count {
		prefs.count()?.set(count);
	}
	if let Some(total) = values.total {
		prefs.total()?.set(total);
	}
	if let Some(ratio) = values.ratio {
		prefs.ratio()?.set(finite(Field::Ratio, ratio)?);
	}
	if let Some(precise) = values.precise {
		prefs.precise()?.set(finite(Field::Precise, precise)?);
	}
	Ok(())
}

/// Stages removal of `field`.
pub fn remove(prefs: &SamplePrefs, field: Field) -> anyhow::Result<()> {
	match field {
		Field::Name => {
			prefs.name()?.remove();
		}
		Field::Flag => {
			prefs.flag()?.remove();
		}
		Field::Count => {
			prefs.count()?.remove();
		}
		Field::Total => {
			prefs.total()?.remove();
		}
		Field::Ratio => {
			prefs.ratio()?.remove();
		}
		Field::Precise => {
			prefs.precise()?.remove();
		}
	}
	Ok(())
}

// JSON has no representation for NaN or infinities.
fn finite<F: Into<f64> + Copy>(field: Field, value: F) -> anyhow::Result<F> {
	if !value.into().is_finite() {
		bail!("{} must be a finite number", field.key());
	}
	Ok(value)
}
