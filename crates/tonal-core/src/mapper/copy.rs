/// Copia profunda de un buffer opcional.
///
/// El resultado es siempre una asignación nueva, de modo que ningún buffer de
/// una entidad queda compartido con el DTO que se construye a partir de ella
/// (ni al revés). `None` se propaga tal cual.
pub fn copy_bytes(src: Option<&[u8]>) -> Option<Vec<u8>> {
  src.map(<[u8]>::to_vec)
}
