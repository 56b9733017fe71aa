//! JPQL 插值：把 `?N` 占位符替换为参数字面量，用于日志输出与排查。
//!
//! 安全警告：插值结果只用于展示，执行时请始终走参数绑定。

use crate::value::JpqlValue;
use crate::valuer::ValuerError;
use time::format_description::FormatItem;
use time::macros::format_description;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InterpolateError {
    #[error("jpql not enough args when interpolating")]
    MissingArgs,
    #[error("{0}")]
    Valuer(#[from] ValuerError),
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// 把 `jpql` 里的 `?N` 占位符按出现顺序替换为 `args` 的字面量。
///
/// 第 K 个占位符对应 `args` 的第 K 个元素，占位符里的编号本身不参与寻址，
/// 因此起始编号不为 1 的语句同样适用。单引号字符串字面量内的 `?` 不会被
/// 识别（`''` 按两次引号处理）。
pub fn interpolate(jpql: &str, args: &[JpqlValue]) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(jpql.len() + args.len() * 8);
    let bytes = jpql.as_bytes();
    let mut in_quote = false;
    let mut arg_idx = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => {
                in_quote = !in_quote;
                out.push('\'');
                i += 1;
            }
            b'?' if !in_quote => {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j == i + 1 {
                    // 裸 `?` 原样保留
                    out.push('?');
                    i += 1;
                } else {
                    if arg_idx >= args.len() {
                        return Err(InterpolateError::MissingArgs);
                    }
                    encode_value(&mut out, &args[arg_idx])?;
                    arg_idx += 1;
                    i = j;
                }
            }
            _ => {
                // 按块拷贝到下一个 `'` 或（引号外的）`?`
                let start = i;
                while i < bytes.len()
                    && bytes[i] != b'\''
                    && (in_quote || bytes[i] != b'?')
                {
                    i += 1;
                }
                out.push_str(&jpql[start..i]);
            }
        }
    }

    Ok(out)
}

fn encode_value(out: &mut String, value: &JpqlValue) -> Result<(), InterpolateError> {
    match value {
        JpqlValue::Null => out.push_str("null"),
        JpqlValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        JpqlValue::I64(n) => out.push_str(&n.to_string()),
        JpqlValue::U64(n) => out.push_str(&n.to_string()),
        JpqlValue::F64(n) => out.push_str(&n.to_string()),
        JpqlValue::String(s) => quote_string(out, s.as_ref()),
        JpqlValue::Bytes(bs) => {
            out.push_str("X'");
            for b in bs {
                out.push_str(&format!("{b:02X}"));
            }
            out.push('\'');
        }
        JpqlValue::Date(d) => {
            out.push('\'');
            out.push_str(&d.format(DATE_FORMAT).expect("format failed"));
            out.push('\'');
        }
        JpqlValue::DateTime(dt) => {
            out.push('\'');
            out.push_str(&dt.format(DATE_TIME_FORMAT).expect("format failed"));
            out.push('\'');
        }
        JpqlValue::List(vs) => {
            out.push('(');
            for (i, v) in vs.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                encode_value(out, v)?;
            }
            out.push(')');
        }
        JpqlValue::Valuer(v) => {
            let resolved = v.value()?;
            encode_value(out, &resolved)?;
        }
    }
    Ok(())
}

fn quote_string(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}
