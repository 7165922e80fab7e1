//! Набор универсальных макросов для приложений Table Map.
//!
//! Сгенерированный код ссылается на `SeatError` напрямую, поэтому тип ошибки
//! должен быть импортирован в модуле, где применяется derive.
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, LitStr, parse_macro_input};

/// Макрос `PipeRecord` генерирует для структуры реализацию `Display`
/// и `FromStr`: запись в одну строку с полями, разделёнными `|`.
///
/// Порядок полей в строке совпадает с порядком объявления в структуре.
/// Пробелы вокруг значений при разборе отбрасываются.
///
/// ## Пример
///
/// ```ignore
/// use macros::PipeRecord;
///
/// #[derive(PipeRecord)]
/// struct Row {
///     id: String,
///     seats: u32,
/// }
///
/// let row: Row = "12 | 8".parse()?;
/// assert_eq!(row.to_string(), "12|8");
/// ```
#[proc_macro_derive(PipeRecord)]
pub fn derive_pipe_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    // Сбор названия полей.
    let fields_name = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => panic!("PipeRecord допустимо использовать только со структурами"),
    };

    let fields: Vec<_> = fields_name
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .collect();

    let fields_count = fields.len();

    // Формат для Display: "{}|{}|{}"
    let fmt_string = vec!["{}"; fields_count].join("|");
    let fmt_lit = LitStr::new(&fmt_string, proc_macro2::Span::call_site());

    let fields_parses: Vec<_> = (0..fields_count)
        .map(|i| {
            let field_name = &fields[i];
            quote! {
                #field_name: parts[#i]
                    .trim()
                    .parse()
                    .map_err(|_| SeatError::value_err(format!(
                        "ошибка разбора строки '{}' на позиции {} для поля {}",
                        s, #i, stringify!(#field_name)
                    )))?,
            }
        })
        .collect();

    let output: proc_macro2::TokenStream = quote! {
        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    f,
                    #fmt_lit,
                    #(self.#fields),*
                )
            }
        }

        impl std::str::FromStr for #struct_name {
            type Err = SeatError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let parts: Vec<&str> = s.split('|').collect();
                if parts.len() != #fields_count {
                    Err(SeatError::value_err(format!(
                        "ожидается {} полей, разделённых '|', получено {} в строке '{}'",
                        #fields_count,
                        parts.len(),
                        s
                    )))
                } else {
                    Ok(Self {
                        #(#fields_parses)*
                    })
                }
            }
        }
    };

    TokenStream::from(output)
}

/// Derive-макрос для `Enum`: автоматически добавляет реализации
/// [`std::fmt::Display`] и [`std::str::FromStr`].
///
/// Строковое значение варианта задаётся атрибутом `#[str("...")]`, иначе
/// используется имя варианта в нижнем регистре. Дополнительно генерируется
/// константа `ALL` со всеми вариантами в порядке объявления.
///
/// ## Пример
///
/// ```ignore
/// use macros::StrEnum;
///
/// #[derive(Debug, Clone, Copy, StrEnum)]
/// enum Panel {
///     #[str("galerie_div")]
///     Gallery,
/// }
///
/// assert_eq!(Panel::Gallery.to_string(), "galerie_div");
/// assert_eq!(Panel::ALL.len(), 1);
/// ```
#[proc_macro_derive(StrEnum, attributes(str))]
pub fn derive_str_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match input.data {
        Data::Enum(e) => e.variants,
        _ => panic!("StrEnum допустимо использовать только с enum"),
    };

    let mut to_arms = Vec::new();
    let mut from_arms = Vec::new();
    let mut all = Vec::new();

    for v in variants {
        let ident = v.ident;
        if !matches!(v.fields, Fields::Unit) {
            panic!("Только unit-variants");
        }
        let mut lit = ident.to_string().to_lowercase();
        for attr in v.attrs {
            if attr.path().is_ident("str") {
                let s: syn::LitStr = attr.parse_args().expect("str(\"...\")");
                lit = s.value();
            }
        }
        let lit_str = syn::LitStr::new(&lit, proc_macro2::Span::call_site());
        to_arms.push(quote! { #name::#ident => write!(f, #lit_str), });
        from_arms.push(quote! { #lit_str => Ok(#name::#ident), });
        all.push(quote! { #name::#ident });
    }

    let count = all.len();

    let expanded = quote! {
        impl #name {
            /// Все варианты перечисления в порядке объявления.
            pub const ALL: [#name; #count] = [#(#all),*];
        }

        impl std::fmt::Display for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                match self { #(#to_arms)* }
            }
        }

        impl std::str::FromStr for #name {
            type Err = SeatError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    #(#from_arms)*
                    _ => Err(SeatError::value_err(format!(
                        "некорректное значение {}: {}",
                        stringify!(#name), s
                    ))),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
