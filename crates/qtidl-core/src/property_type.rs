//! The closed set of types a property may be declared with

use crate::error::UnknownPropertyType;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! property_types {
    ($($variant:ident => $keyword:literal),+ $(,)?) => {
        /// Value type of a declared property.
        ///
        /// Only these keywords are accepted at the property type position;
        /// there is no way to register additional types.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum PropertyType {
            $($variant,)+
        }

        impl PropertyType {
            /// Every recognized type, in declaration order
            pub const ALL: &'static [PropertyType] = &[$(PropertyType::$variant,)+];

            /// The C++ type name, which is also the IDL keyword
            pub fn as_str(self) -> &'static str {
                match self {
                    $(PropertyType::$variant => $keyword,)+
                }
            }

            /// Look up a keyword. Matching is exact and case-sensitive.
            pub fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($keyword => Some(PropertyType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

property_types! {
    Bool => "bool",
    Qint8 => "qint8",
    Qint16 => "qint16",
    Qint32 => "qint32",
    Qint64 => "qint64",
    Quint8 => "quint8",
    Quint16 => "quint16",
    Quint32 => "quint32",
    Quint64 => "quint64",
    Float => "float",
    Double => "double",
    QBitArray => "QBitArray",
    QBrush => "QBrush",
    QByteArray => "QByteArray",
    QColor => "QColor",
    QCursor => "QCursor",
    QDate => "QDate",
    QDateTime => "QDateTime",
    QEasingCurve => "QEasingCurve",
    QFont => "QFont",
    QGenericMatrix => "QGenericMatrix",
    QIcon => "QIcon",
    QImage => "QImage",
    QKeySequence => "QKeySequence",
    QMargins => "QMargins",
    QMatrix4x4 => "QMatrix4x4",
    QPalette => "QPalette",
    QPen => "QPen",
    QPicture => "QPicture",
    QPixmap => "QPixmap",
    QPoint => "QPoint",
    QQuaternion => "QQuaternion",
    QRect => "QRect",
    QRegExp => "QRegExp",
    QRegularExpression => "QRegularExpression",
    QRegion => "QRegion",
    QSize => "QSize",
    QString => "QString",
    QTime => "QTime",
    QTransform => "QTransform",
    QUrl => "QUrl",
    QVariant => "QVariant",
    QVector2D => "QVector2D",
    QVector3D => "QVector3D",
    QVector4D => "QVector4D",
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

impl Serialize for PropertyType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
