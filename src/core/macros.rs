//! 核心宏定义
//!
//! 配置结构体的默认值统一通过宏声明

/// 为结构体实现Default trait的宏
///
/// 使用示例:
/// ```rust
/// use particle_engine::impl_default;
///
/// struct EmitterSettings {
///     quota: usize,
///     label: String,
/// }
///
/// impl_default!(EmitterSettings {
///     quota: 2,
///     label: String::from("sparks"),
/// });
///
/// assert_eq!(EmitterSettings::default().quota, 2);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}
