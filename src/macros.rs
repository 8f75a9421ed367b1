//! 宏集合：为列名参数提供可变参数调用封装。
//! 通过 `select_specific!` / `select_custom!`，可以直接传入不定长列名而无需手动创建 `Vec`。

#[doc(hidden)]
#[macro_export]
macro_rules! __collect_strings {
    () => {
        Vec::<String>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<String>::new();
        $(
            $crate::extend_into_strings($value, &mut values);
        )*
        values
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __builder_with_strings {
    ($builder:expr, $method:ident $(, $arg:expr)* $(,)?) => {
        $builder.$method($crate::__collect_strings!($($arg),*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __builder_with_strings_after {
    ($builder:expr, $method:ident, $first:expr $(, $arg:expr)* $(,)?) => {
        $builder.$method($first, $crate::__collect_strings!($($arg),*))
    };
}

/// 可以被展开为列名列表的输入：单个字符串、数组、切片或 `Vec`。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl<'a> IntoStrings for &'a str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_string());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<'a, T> IntoStrings for &'a [T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        for item in self {
            dst.push(item.clone().into());
        }
    }
}

impl<'a, T> IntoStrings for &'a Vec<T>
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        self.as_slice().extend_into_strings(dst);
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

#[doc(hidden)]
pub fn extend_into_strings<T>(value: T, dst: &mut Vec<String>)
where
    T: IntoStrings,
{
    value.extend_into_strings(dst);
}

#[doc(hidden)]
pub fn collect_into_strings<T>(value: T) -> Vec<String>
where
    T: IntoStrings,
{
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}

/// 为 `FluentQuery::select_specific` 提供可变参数调用。
#[macro_export]
macro_rules! select_specific {
    ($builder:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings!($builder, select_specific $(, $col)*)
    };
}
pub use crate::select_specific;

/// 为 `FluentQuery::select_custom` 提供可变参数调用：第一个参数是自定义表达式。
#[macro_export]
macro_rules! select_custom {
    ($builder:expr, $expr:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings_after!($builder, select_custom, $expr $(, $col)*)
    };
}
pub use crate::select_custom;
