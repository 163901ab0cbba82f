//! Schema declaration macro

/// Declare a component schema.
///
/// Generates, from one list of `Name: Type` pairs:
/// - the schema marker type implementing [`Schema`](crate::ecs::Schema)
/// - an id enum with one variant per component
/// - a state enum wrapping each component's value
/// - a module of zero-sized keys implementing
///   [`ComponentKey`](crate::ecs::ComponentKey)
///
/// Every value type must implement `Clone`, `Debug` and `PartialEq`.
///
/// # Example
/// ```
/// use facet_core::define_schema;
/// use facet_core::ecs::{ComponentCollection, Schema};
///
/// define_schema! {
///     pub schema Demo(DemoId, DemoState) in demo {
///         Foo: i32,
///         Bar: String,
///     }
/// }
///
/// let c0 = ComponentCollection::<Demo>::from_schema([]);
/// let c1 = c0.add_component::<demo::Foo>(42).unwrap();
/// assert_eq!(c1.component::<demo::Foo>(), Some(&42));
/// assert_eq!(Demo::ALL, &[DemoId::Foo, DemoId::Bar]);
/// ```
#[macro_export]
macro_rules! define_schema {
    (
        $(#[$meta:meta])*
        $vis:vis schema $schema:ident($id:ident, $state:ident) in $keys:ident {
            $(
                $(#[$cmeta:meta])*
                $name:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $schema;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $id {
            $( $(#[$cmeta])* $name, )+
        }

        #[derive(Debug, Clone, PartialEq)]
        $vis enum $state {
            $( $(#[$cmeta])* $name($ty), )+
        }

        impl $crate::ecs::Schema for $schema {
            type Id = $id;
            type State = $state;

            const ALL: &'static [$id] = &[$( $id::$name, )+];

            fn id_of(state: &$state) -> $id {
                match state {
                    $( $state::$name(_) => $id::$name, )+
                }
            }

            fn name_of(id: $id) -> &'static str {
                match id {
                    $( $id::$name => stringify!($name), )+
                }
            }
        }

        $vis mod $keys {
            $(
                $(#[$cmeta])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $name;
            )+
        }

        $(
            impl $crate::ecs::ComponentKey<$schema> for $keys::$name {
                type Value = $ty;

                const ID: $id = $id::$name;

                fn into_state(value: $ty) -> $state {
                    $state::$name(value)
                }

                fn from_state(state: &$state) -> Option<&$ty> {
                    match state {
                        $state::$name(value) => Some(value),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}
