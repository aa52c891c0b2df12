#[macro_export]
macro_rules! yso {
    // Handle empty document
    ({}) => {
        $crate::Document::new()
    };

    // Handle document with sections
    ({ $($section:literal : { $($key:literal : $value:expr),* $(,)? }),* $(,)? }) => {{
        let mut doc = $crate::Document::new();
        $(
            {
                let section = doc.section_mut($section);
                $(
                    section.set($key, $value);
                )*
                let _ = section;
            }
        )*
        doc
    }};
}
