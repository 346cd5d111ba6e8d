/// Declares lazily registered attribute type tags in the process-wide registry.
///
/// Each entry becomes a `LazyLock<AttributeType>` that registers its alias on
/// first dereference. Registration is idempotent, so two crates declaring the
/// same alias share one tag.
///
/// ```
/// gloss_attribute::attribute_types! {
/// 	/// Diffuse color.
/// 	pub static DIFFUSE = "diffuse";
/// 	static SPECULAR = "specular";
/// }
///
/// assert_ne!(*DIFFUSE, *SPECULAR);
/// ```
///
/// # Panics
///
/// Dereferencing panics if the process-wide registry is full. A program that
/// declares more kinds than tags exist is misconfigured at build time.
#[macro_export]
macro_rules! attribute_types {
	($( $(#[$attr:meta])* $vis:vis static $name:ident = $alias:expr; )*) => {
		$(
			$(#[$attr])*
			$vis static $name: ::std::sync::LazyLock<$crate::AttributeType> = ::std::sync::LazyLock::new(|| {
				$crate::register($alias).unwrap_or_else(|e| panic!("{e}"))
			});
		)*
	};
}
