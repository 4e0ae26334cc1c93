//! IO helper: JSON schema input/output for files and stdio

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde_json::Value;

use crate::model::converter::ConvertError;

/// `-` 表示标准输入/输出
fn is_stdio(p: Option<&Path>) -> bool {
    p.map_or(true, |p| p.as_os_str() == "-")
}

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, ConvertError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 从任意读取器解析JSON
pub fn read_json<R: Read>(rdr: R) -> Result<Value, ConvertError> {
    Ok(serde_json::from_reader(BufReader::new(rdr))?)
}

/// 读取输入：未指定路径或 `-` 时读标准输入
pub fn read_json_input(p: Option<&Path>) -> Result<Value, ConvertError> {
    match p {
        Some(p) if !is_stdio(Some(p)) => read_json_file(p),
        _ => read_json(io::stdin().lock()),
    }
}

/// 写出JSON，pretty 为 true 时格式化输出，末尾追加换行
pub fn write_json<W: Write>(w: W, value: &Value, pretty: bool) -> Result<(), ConvertError> {
    let mut w = BufWriter::new(w);
    if pretty {
        serde_json::to_writer_pretty(&mut w, value)?;
    } else {
        serde_json::to_writer(&mut w, value)?;
    }
    w.write_all(b"\n")?;
    w.flush()?;
    Ok(())
}

/// 将JSON数据保存到文件（格式化输出）
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), ConvertError> {
    write_json(File::create(p)?, value, true)
}

/// 写出结果：未指定路径或 `-` 时写标准输出
pub fn write_json_output(
    p: Option<&Path>,
    value: &Value,
    pretty: bool,
) -> Result<(), ConvertError> {
    match p {
        Some(p) if !is_stdio(Some(p)) => write_json(File::create(p)?, value, pretty),
        _ => write_json(io::stdout().lock(), value, pretty),
    }
}
