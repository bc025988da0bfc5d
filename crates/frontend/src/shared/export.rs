/// CSV report export: builds the file client-side and hands it to the
/// browser as a Blob download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column headers, in the exact order the report contract fixes
    fn headers() -> Vec<&'static str>;

    /// One row of cell values, matching the header order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build the CSV content. Header order comes from `headers()` regardless of
/// how the source structs are laid out; cells are quoted only when needed.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    let headers = T::headers();
    csv_content.push_str(&headers.join(","));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Export a list to a CSV file and trigger the browser download
pub fn download_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    // UTF-8 BOM so Excel opens the file with the right encoding
    let mut content = String::from('\u{FEFF}');
    content.push_str(&build_csv(data));

    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

/// Quote a cell if it contains a separator, quote or newline
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download a Blob through a temporary anchor element
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        a: String,
        b: String,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["A", "B"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.a.clone(), self.b.clone()]
        }
    }

    #[test]
    fn test_plain_cells_stay_unquoted() {
        let rows = vec![Row {
            a: "one".to_string(),
            b: "two".to_string(),
        }];
        assert_eq!(build_csv(&rows), "A,B\none,two\n");
    }

    #[test]
    fn test_comma_cell_is_quoted() {
        let rows = vec![Row {
            a: "A,B".to_string(),
            b: "plain".to_string(),
        }];
        assert_eq!(build_csv(&rows), "A,B\n\"A,B\",plain\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![Row {
            a: "say \"hi\"".to_string(),
            b: "x".to_string(),
        }];
        assert_eq!(build_csv(&rows), "A,B\n\"say \"\"hi\"\"\",x\n");
    }
}
